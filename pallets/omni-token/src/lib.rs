//! # Omni Token Pallet
//!
//! A fungible token deployed as one instance per chain. Every instance keeps its own balance
//! ledger, while a single designated home chain is the only place new supply may be issued,
//! bounded by a global cap. Value moves between instances in two independent local steps:
//!
//! - **Debit** ([`Pallet::send`]) burns the sender's balance on the source instance and hands a
//!   [`TransferMessage`] to the transport.
//! - **Credit** ([`Pallet::receive`]) is invoked by the transport on the destination instance and
//!   issues the delivered amount to the recipient.
//!
//! Each instance records in [`ChainSupply`] the portion of total supply attributable to it. The
//! sum across instances is only eventually consistent: between a debit and its credit the value
//! is in flight, and a message that is never delivered is never credited. There is no rollback
//! of a committed debit; off-chain reconciliation pairs [`Event::TransferSent`] with
//! [`Event::TransferReceived`] through their correlation identifiers.
//!
//! Minting, burning and bridging can each be switched off by the admin origin, and a global
//! pause blocks every value-moving call while leaving admin calls available.

#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` is deprecated upstream; the storage accessors below still rely on it.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::DecodeWithMemTracking;
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{EnsureOrigin, UnixTime},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::Hash;
use sp_std::prelude::*;

pub use pallet::*;
pub use transport::{CrossChainTransport, DebitQuote, DustRemoval, TransferMessage};
pub use weights::WeightInfo;

pub mod migrations;
pub mod transport;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(2);

pub(crate) const LOG_TARGET: &str = "runtime::omni-token";

/// Identifier of a chain instance. Zero is reserved and never names a valid chain.
pub type ChainId = u32;

/// Operation families that can be switched off independently.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Encode,
    Decode,
    DecodeWithMemTracking,
    frame_support::PalletError,
    TypeInfo,
    MaxEncodedLen,
)]
pub enum Feature {
    Mint,
    Burn,
    Bridge,
}

/// Feature switches. Everything is enabled until the admin says otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, Decode, TypeInfo, MaxEncodedLen)]
pub struct FeatureFlags {
    pub minting_enabled: bool,
    pub burning_enabled: bool,
    pub bridging_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { minting_enabled: true, burning_enabled: true, bridging_enabled: true }
    }
}

impl FeatureFlags {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Mint => self.minting_enabled,
            Feature::Burn => self.burning_enabled,
            Feature::Bridge => self.bridging_enabled,
        }
    }
}

/// Issuance rejected by the global cap.
///
/// Module errors cannot carry `u128` payloads, so the dispatch path flattens this into
/// [`Error::CapacityExceeded`]; callers that need the amounts use [`Pallet::ensure_capacity`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CapacityExceeded {
    pub requested: u128,
    pub available: u128,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Administrator capability: minting, feature switches, pause and ledger correction.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Held by the messaging transport's delivery mechanism. Only it may credit inbound
        /// transfers, and it is expected to have authenticated the message already.
        type TransportOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Outbound amount adjustment and message hand-off.
        type Transport: CrossChainTransport<Self::AccountId, Self::Hash>;

        /// Timestamp source for correlation identifiers and pause records.
        type TimeProvider: UnixTime;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Omni Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "OMNI")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (e.g., 6 for USDC-style, 18 for ETH-style)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Supply held on this chain instance.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (owner, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Maximum total supply across all chain instances. Zero means unlimited. Genesis only.
    #[pallet::storage]
    #[pallet::getter(fn global_cap)]
    pub type GlobalCap<T> = StorageValue<_, u128, ValueQuery>;

    /// The only chain instance allowed to mint. Genesis only.
    #[pallet::storage]
    #[pallet::getter(fn home_chain_id)]
    pub type HomeChainId<T> = StorageValue<_, ChainId, ValueQuery>;

    /// Identifier of the chain instance this runtime is. Genesis only.
    #[pallet::storage]
    #[pallet::getter(fn local_chain_id)]
    pub type LocalChainId<T> = StorageValue<_, ChainId, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn feature_flags)]
    pub type Flags<T> = StorageValue<_, FeatureFlags, ValueQuery>;

    /// Emergency circuit breaker.
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type PauseState<T> = StorageValue<_, bool, ValueQuery>;

    /// Locally accounted supply per chain identifier.
    #[pallet::storage]
    #[pallet::getter(fn chain_supply)]
    pub type ChainSupply<T> = StorageMap<_, Twox64Concat, ChainId, u128, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Spending allowance set
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// New tokens minted on the home chain
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed
        Burned { from: T::AccountId, amount: u128 },
        /// A chain supply ledger entry changed
        ChainSupplyUpdated { chain_id: ChainId, supply: u128 },
        MintingStatusChanged { enabled: bool },
        BurningStatusChanged { enabled: bool },
        BridgingStatusChanged { enabled: bool },
        /// Circuit breaker engaged (`at` is unix seconds)
        Paused { at: u64 },
        /// Circuit breaker released (`at` is unix seconds)
        Unpaused { at: u64 },
        /// Outbound transfer debited on this chain
        TransferSent {
            correlation_id: T::Hash,
            from: T::AccountId,
            recipient: T::AccountId,
            destination_chain: ChainId,
            amount_sent: u128,
            amount_received: u128,
        },
        /// Inbound transfer credited on this chain
        TransferReceived {
            correlation_id: T::Hash,
            source_correlation_id: T::Hash,
            source_chain: ChainId,
            recipient: T::AccountId,
            amount_credited: u128,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Issuance would exceed the global cap.
        CapacityExceeded,
        FeatureDisabled { kind: Feature },
        /// Issuance attempted off the home chain.
        WrongChain,
        Paused,
        InsufficientAllowance,
        InvalidChainIdentifier,
        InsufficientBalance,
        /// The transport would deliver less than the sender accepts.
        SlippageExceeded,
        Overflow,
        Underflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Issue new supply. Only on the home chain and only within the global cap.
        ///
        /// The cap is measured against the supply held here (see [`Pallet::ensure_capacity`]),
        /// so value sent to other chains frees room for new issuance.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::ensure_home_chain()?;
            Self::ensure_not_paused()?;
            Self::ensure_enabled(Feature::Mint)?;
            Self::ensure_capacity(amount).map_err(|e| {
                log::warn!(
                    target: LOG_TARGET,
                    "mint rejected: requested {} exceeds available {}",
                    e.requested,
                    e.available
                );
                Error::<T>::from(e)
            })?;

            Self::issue(&to, amount)?;
            let supply = Self::increase_chain_supply(Self::local_chain_id(), amount)?;

            log::debug!(target: LOG_TARGET, "minted {amount}, local supply now {supply}");
            Self::deposit_event(Event::Minted { to, amount });
            Self::deposit_event(Event::ChainSupplyUpdated {
                chain_id: Self::local_chain_id(),
                supply,
            });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;

            Self::move_balance(&sender, &to, amount)?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        /// Overwrite the caller's allowance for `spender`. Moves no value, so it is not paused.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_allowance(&owner, &spender, amount)?;
            ensure!(Balances::<T>::get(&owner) >= amount, Error::<T>::InsufficientBalance);

            Self::spend_allowance(&owner, &spender, amount)?;
            Self::move_balance(&owner, &to, amount)?;
            Self::deposit_event(Event::Transferred { from: owner, to, amount });
            Ok(())
        }

        /// Destroy part of the caller's balance. Allowed on every chain instance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_enabled(Feature::Burn)?;

            Self::do_burn(who, amount)
        }

        /// Destroy part of `owner`'s balance, spending the caller's allowance.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, owner: T::AccountId, amount: u128) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_enabled(Feature::Burn)?;
            Self::ensure_allowance(&owner, &spender, amount)?;
            ensure!(Balances::<T>::get(&owner) >= amount, Error::<T>::InsufficientBalance);

            Self::spend_allowance(&owner, &spender, amount)?;
            Self::do_burn(owner, amount)
        }

        /// Debit step of a cross-chain transfer.
        ///
        /// The transport decides how much of `amount` actually leaves (it may round to its own
        /// precision); the ledger follows the actual amount. Once this call succeeds the debit is
        /// final: if the message is never delivered nothing here reverses it. A destination the
        /// transport does not serve is rejected up front.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::send())]
        pub fn send(
            origin: OriginFor<T>,
            destination_chain: ChainId,
            recipient: T::AccountId,
            amount: u128,
            min_amount: u128,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_enabled(Feature::Bridge)?;
            Self::ensure_remote_chain(destination_chain)?;
            ensure!(
                T::Transport::is_peer_reachable(destination_chain),
                Error::<T>::InvalidChainIdentifier
            );

            Self::do_debit(sender, destination_chain, recipient, amount, min_amount)
        }

        /// Credit step of a cross-chain transfer, invoked by the transport on delivery.
        ///
        /// `amount` is what the message carried; the transport converts it to the amount actually
        /// credited, and that is what the recipient and the ledger receive. No cap check happens
        /// here: the value was issued on the home chain and debited at the source before it
        /// travelled.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::receive())]
        pub fn receive(
            origin: OriginFor<T>,
            source_chain: ChainId,
            source_correlation_id: T::Hash,
            recipient: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            T::TransportOrigin::ensure_origin(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_enabled(Feature::Bridge)?;
            Self::ensure_remote_chain(source_chain)?;

            Self::do_credit(source_chain, source_correlation_id, recipient, amount)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_feature())]
        pub fn set_minting_enabled(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Flags::<T>::mutate(|flags| flags.minting_enabled = enabled);
            Self::deposit_event(Event::MintingStatusChanged { enabled });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_feature())]
        pub fn set_burning_enabled(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Flags::<T>::mutate(|flags| flags.burning_enabled = enabled);
            Self::deposit_event(Event::BurningStatusChanged { enabled });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::set_feature())]
        pub fn set_bridging_enabled(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Flags::<T>::mutate(|flags| flags.bridging_enabled = enabled);
            Self::deposit_event(Event::BridgingStatusChanged { enabled });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            PauseState::<T>::put(true);

            let at = T::TimeProvider::now().as_secs();
            log::info!(target: LOG_TARGET, "circuit breaker engaged at {at}");
            Self::deposit_event(Event::Paused { at });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            PauseState::<T>::put(false);

            let at = T::TimeProvider::now().as_secs();
            log::info!(target: LOG_TARGET, "circuit breaker released at {at}");
            Self::deposit_event(Event::Unpaused { at });
            Ok(())
        }

        /// Overwrite the supply recorded for `chain_id`.
        ///
        /// Manual reconciliation for drift left by undelivered transfers. The value is taken as
        /// given: nothing is checked against issuance, burns or transfer history. Whoever holds
        /// `AdminOrigin` can rewrite any chain's accounting with this call, so every
        /// `ChainSupplyUpdated` event it produces should be reviewed.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::update_chain_supply())]
        pub fn update_chain_supply(
            origin: OriginFor<T>,
            chain_id: ChainId,
            supply: u128,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(chain_id != 0, Error::<T>::InvalidChainIdentifier);

            let previous = ChainSupply::<T>::get(chain_id);
            ChainSupply::<T>::insert(chain_id, supply);

            log::warn!(
                target: LOG_TARGET,
                "chain supply for {chain_id} overwritten by admin: {previous} -> {supply}"
            );
            Self::deposit_event(Event::ChainSupplyUpdated { chain_id, supply });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Global issuance cap (0 = unlimited)
        pub global_cap: u128,
        /// Chain instance allowed to mint
        pub home_chain_id: ChainId,
        /// Identifier of the chain instance being built
        pub local_chain_id: ChainId,
        /// Initial token mints (account, amount); home chain only
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            assert!(self.home_chain_id != 0, "Home chain id must be non-zero");
            assert!(self.local_chain_id != 0, "Local chain id must be non-zero");
            GlobalCap::<T>::put(self.global_cap);
            HomeChainId::<T>::put(self.home_chain_id);
            LocalChainId::<T>::put(self.local_chain_id);

            assert!(
                self.initial_balances.is_empty() || self.home_chain_id == self.local_chain_id,
                "Initial balances can only be issued on the home chain"
            );

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |bal| {
                    *bal = bal.checked_add(*amount).expect("Initial balance overflow")
                });
                total = total.checked_add(*amount).expect("Initial supply overflow");
            }
            assert!(
                self.global_cap == 0 || total <= self.global_cap,
                "Initial balances exceed the global cap"
            );
            TotalSupply::<T>::put(total);
            ChainSupply::<T>::insert(self.local_chain_id, total);
        }
    }
}

impl<T: Config> From<CapacityExceeded> for Error<T> {
    fn from(_: CapacityExceeded) -> Self {
        Error::<T>::CapacityExceeded
    }
}

impl<T: Config> Pallet<T> {
    /// Whether this instance is the one allowed to mint.
    pub fn is_home_chain() -> bool {
        Self::local_chain_id() == Self::home_chain_id()
    }

    /// Supply accounted to this instance.
    pub fn current_chain_supply() -> u128 {
        ChainSupply::<T>::get(Self::local_chain_id())
    }

    /// How much may still be minted here right now.
    ///
    /// Zero off the home chain or with minting disabled, `u128::MAX` without a cap. The pause
    /// state is not taken into account.
    pub fn mintable_supply() -> u128 {
        if !Self::is_home_chain() || !Self::feature_flags().minting_enabled {
            return 0;
        }
        match Self::global_cap() {
            0 => u128::MAX,
            cap => cap.saturating_sub(Self::total_supply()),
        }
    }

    /// Boolean form of the issuance checks behind [`Self::mintable_supply`].
    pub fn can_mint(amount: u128) -> bool {
        Self::is_home_chain() &&
            Self::feature_flags().minting_enabled &&
            Self::ensure_capacity(amount).is_ok()
    }

    pub fn ensure_not_paused() -> DispatchResult {
        ensure!(!PauseState::<T>::get(), Error::<T>::Paused);
        Ok(())
    }

    pub fn ensure_enabled(feature: Feature) -> DispatchResult {
        ensure!(Flags::<T>::get().is_enabled(feature), Error::<T>::FeatureDisabled { kind: feature });
        Ok(())
    }

    pub fn ensure_home_chain() -> DispatchResult {
        ensure!(Self::is_home_chain(), Error::<T>::WrongChain);
        Ok(())
    }

    /// A peer chain must be a valid identifier other than our own.
    pub fn ensure_remote_chain(chain_id: ChainId) -> DispatchResult {
        ensure!(
            chain_id != 0 && chain_id != Self::local_chain_id(),
            Error::<T>::InvalidChainIdentifier
        );
        Ok(())
    }

    /// Check `amount` against the room left under the global cap.
    ///
    /// Room is `cap - TotalSupply` of this instance. Value debited towards other chains no
    /// longer counts, so the supply summed over every chain can end up above the cap: mint up
    /// to the cap, send it away, mint again. Nothing on the home chain sees the remote side of
    /// the ledger, and closing this needs either a trusted aggregate or a transport that reports
    /// outstanding value. Until then the cap bounds local supply and issuance must be monitored
    /// off-chain against the summed `ChainSupply` entries.
    pub fn ensure_capacity(amount: u128) -> Result<(), CapacityExceeded> {
        let cap = GlobalCap::<T>::get();
        if cap == 0 {
            return Ok(());
        }
        let available = cap.saturating_sub(TotalSupply::<T>::get());
        if amount > available {
            return Err(CapacityExceeded { requested: amount, available });
        }
        Ok(())
    }

    /// Correlation identifier linking an audit record to its counterpart on the peer chain.
    pub fn correlation_id(account: &T::AccountId, chain_id: ChainId, amount: u128) -> T::Hash {
        let timestamp = T::TimeProvider::now().as_secs();
        T::Hashing::hash_of(&(account, chain_id, amount, timestamp))
    }

    fn do_burn(from: T::AccountId, amount: u128) -> DispatchResult {
        Self::destroy(&from, amount)?;
        let supply = Self::decrease_chain_supply(Self::local_chain_id(), amount)?;

        log::debug!(target: LOG_TARGET, "burned {amount}, local supply now {supply}");
        Self::deposit_event(Event::Burned { from, amount });
        Self::deposit_event(Event::ChainSupplyUpdated { chain_id: Self::local_chain_id(), supply });
        Ok(())
    }

    fn do_debit(
        sender: T::AccountId,
        destination_chain: ChainId,
        recipient: T::AccountId,
        amount: u128,
        min_amount: u128,
    ) -> DispatchResult {
        let DebitQuote { amount_sent, amount_received } =
            T::Transport::quote_debit(amount, destination_chain);
        ensure!(amount_received >= min_amount, Error::<T>::SlippageExceeded);

        let source_chain = Self::local_chain_id();
        Self::destroy(&sender, amount_sent)?;
        let supply = Self::decrease_chain_supply(source_chain, amount_sent)?;

        let correlation_id = Self::correlation_id(&sender, destination_chain, amount_sent);
        T::Transport::send(&TransferMessage {
            correlation_id,
            sender: sender.clone(),
            recipient: recipient.clone(),
            source_chain,
            destination_chain,
            amount: amount_received,
        })?;

        log::debug!(
            target: LOG_TARGET,
            "debited {amount_sent} (requested {amount}) towards chain {destination_chain}, local supply now {supply}"
        );
        Self::deposit_event(Event::TransferSent {
            correlation_id,
            from: sender,
            recipient,
            destination_chain,
            amount_sent,
            amount_received,
        });
        Ok(())
    }

    fn do_credit(
        source_chain: ChainId,
        source_correlation_id: T::Hash,
        recipient: T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        let local_chain = Self::local_chain_id();
        let credited = T::Transport::quote_credit(amount, source_chain);
        Self::issue(&recipient, credited)?;
        let supply = Self::increase_chain_supply(local_chain, credited)?;

        let correlation_id = Self::correlation_id(&recipient, local_chain, credited);
        log::debug!(
            target: LOG_TARGET,
            "credited {credited} (delivered {amount}) from chain {source_chain}, local supply now {supply}"
        );
        Self::deposit_event(Event::TransferReceived {
            correlation_id,
            source_correlation_id,
            source_chain,
            recipient,
            amount_credited: credited,
        });
        Ok(())
    }

    fn issue(to: &T::AccountId, amount: u128) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);
        Ok(())
    }

    fn destroy(from: &T::AccountId, amount: u128) -> DispatchResult {
        let balance = Balances::<T>::get(from);
        ensure!(balance >= amount, Error::<T>::InsufficientBalance);
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Underflow)?;

        Balances::<T>::insert(from, balance - amount);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
        if from == to {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(from, from_balance - amount);
        Balances::<T>::insert(to, to_balance);
        Ok(())
    }

    fn ensure_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(
            Allowances::<T>::get(owner, spender) >= amount,
            Error::<T>::InsufficientAllowance
        );
        Ok(())
    }

    fn spend_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        Allowances::<T>::try_mutate(owner, spender, |allowance| -> DispatchResult {
            *allowance = allowance.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;
            Ok(())
        })
    }

    fn increase_chain_supply(chain_id: ChainId, amount: u128) -> Result<u128, DispatchError> {
        ChainSupply::<T>::try_mutate(chain_id, |supply| -> Result<u128, DispatchError> {
            *supply = supply.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(*supply)
        })
    }

    fn decrease_chain_supply(chain_id: ChainId, amount: u128) -> Result<u128, DispatchError> {
        ChainSupply::<T>::try_mutate(chain_id, |supply| -> Result<u128, DispatchError> {
            *supply = supply.checked_sub(amount).ok_or(Error::<T>::Underflow)?;
            Ok(*supply)
        })
    }
}
