#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_omni_token.
pub trait WeightInfo {
    fn mint() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn send() -> Weight;
    fn receive() -> Weight;
    fn set_feature() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn update_chain_supply() -> Weight;
}

/// Default weights for pallet_omni_token
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // HomeChainId, LocalChainId, PauseState, Flags, GlobalCap, TotalSupply, Balances, ChainSupply
    fn mint() -> Weight {
        Weight::from_parts(25_000, 0)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    fn transfer() -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }

    fn approve() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }

    fn transfer_from() -> Weight {
        Weight::from_parts(20_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    fn burn() -> Weight {
        Weight::from_parts(20_000, 0)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    fn burn_from() -> Weight {
        Weight::from_parts(25_000, 0)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(4))
    }

    // Timestamp read for the correlation id on top of the burn path
    fn send() -> Weight {
        Weight::from_parts(35_000, 0)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    fn receive() -> Weight {
        Weight::from_parts(30_000, 0)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    fn set_feature() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn pause() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn unpause() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn update_chain_supply() -> Weight {
        Weight::from_parts(10_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(25_000, 0)
    }

    fn transfer() -> Weight {
        Weight::from_parts(15_000, 0)
    }

    fn approve() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn transfer_from() -> Weight {
        Weight::from_parts(20_000, 0)
    }

    fn burn() -> Weight {
        Weight::from_parts(20_000, 0)
    }

    fn burn_from() -> Weight {
        Weight::from_parts(25_000, 0)
    }

    fn send() -> Weight {
        Weight::from_parts(35_000, 0)
    }

    fn receive() -> Weight {
        Weight::from_parts(30_000, 0)
    }

    fn set_feature() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn pause() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn unpause() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn update_chain_supply() -> Weight {
        Weight::from_parts(10_000, 0)
    }
}
