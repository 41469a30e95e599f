//! Benchmarking setup for pallet-omni-token

use super::*;

#[allow(unused)]
use crate::Pallet as OmniToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;
const BALANCE: u128 = 10_000_000;

/// Give `who` a balance that is fully accounted to the local chain.
fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::insert(who, amount);
    TotalSupply::<T>::mutate(|supply| *supply += amount);
    ChainSupply::<T>::mutate(LocalChainId::<T>::get(), |supply| *supply += amount);
}

/// A chain id distinct from the local one.
fn remote_chain<T: Config>() -> ChainId {
    LocalChainId::<T>::get().wrapping_add(1).max(1)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        HomeChainId::<T>::put(LocalChainId::<T>::get());
        GlobalCap::<T>::put(TotalSupply::<T>::get().saturating_add(amount));
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        fund::<T>(&caller, BALANCE);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), BALANCE);

        assert_eq!(Allowances::<T>::get(&caller, &spender), BALANCE);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        fund::<T>(&owner, BALANCE);
        Allowances::<T>::insert(&owner, &caller, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &caller), 0);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let amount: u128 = 1_000_000;
        fund::<T>(&caller, BALANCE);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Balances::<T>::get(&caller), BALANCE - amount);
    }

    #[benchmark]
    fn burn_from() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let caller: T::AccountId = whitelisted_caller();
        let amount: u128 = 1_000_000;
        fund::<T>(&owner, BALANCE);
        Allowances::<T>::insert(&owner, &caller, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), owner.clone(), amount);

        assert_eq!(Balances::<T>::get(&owner), BALANCE - amount);
    }

    #[benchmark]
    fn send() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        fund::<T>(&caller, BALANCE);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), remote_chain::<T>(), recipient, amount, 0);

        assert!(Balances::<T>::get(&caller) < BALANCE);
    }

    #[benchmark]
    fn receive() {
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        let origin = T::TransportOrigin::try_successful_origin().expect("Transport origin");

        #[extrinsic_call]
        _(
            origin as T::RuntimeOrigin,
            remote_chain::<T>(),
            T::Hash::default(),
            recipient.clone(),
            amount,
        );

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn set_feature() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        set_minting_enabled(origin as T::RuntimeOrigin, false);

        assert!(!Flags::<T>::get().minting_enabled);
    }

    #[benchmark]
    fn pause() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(PauseState::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        PauseState::<T>::put(true);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(!PauseState::<T>::get());
    }

    #[benchmark]
    fn update_chain_supply() {
        let chain_id = remote_chain::<T>();
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, chain_id, BALANCE);

        assert_eq!(ChainSupply::<T>::get(chain_id), BALANCE);
    }

    impl_benchmark_test_suite!(OmniToken, crate::mock::new_test_ext(), crate::mock::Test);
}
