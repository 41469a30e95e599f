//! Storage migrations for pallet-omni-token.
//!
//! Each migration is versioned and runs exactly once: it checks the on-chain storage version,
//! does its work only when the chain is behind, and bumps the version afterwards.
//!
//! # History
//!
//! - **v1**: single-chain token. Metadata, `Balances` and `TotalSupply` only.
//! - **v2**: multi-chain accounting. Adds the chain identifiers, the global cap, feature flags,
//!   the pause state, allowances and the per-chain supply ledger.
//!
//! # Wiring Migrations in Runtime
//!
//! ```ignore
//! parameter_types! {
//!     pub const LocalChain: ChainId = 2;
//!     pub const HomeChain: ChainId = 1;
//! }
//!
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_omni_token::migrations::v2::MigrateToV2<Runtime, LocalChain, HomeChain>,
//! >;
//! ```
//!
//! Storage that v2 introduces with a default needs no write: feature flags default to enabled,
//! the circuit breaker to released, allowances to zero and the global cap to zero (unlimited).
//! A deployment that wants a cap has to start from genesis.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{ChainId, ChainSupply, Config, HomeChainId, LocalChainId, Pallet, TotalSupply, LOG_TARGET};

/// Migration to version 2 (multi-chain accounting).
pub mod v2 {
    use super::*;

    /// Records which chain this is and which chain mints, then seeds the local supply ledger
    /// entry with the supply that already exists.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The runtime configuration type implementing `Config`
    /// * `LocalChain` - Identifier of the chain being upgraded
    /// * `HomeChain` - Identifier of the chain allowed to mint
    pub struct MigrateToV2<T, LocalChain, HomeChain>(PhantomData<(T, LocalChain, HomeChain)>);

    impl<T, LocalChain, HomeChain> OnRuntimeUpgrade for MigrateToV2<T, LocalChain, HomeChain>
    where
        T: Config,
        LocalChain: Get<ChainId>,
        HomeChain: Get<ChainId>,
    {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 2 {
                let local = LocalChain::get();
                let supply = TotalSupply::<T>::get();

                LocalChainId::<T>::put(local);
                HomeChainId::<T>::put(HomeChain::get());
                ChainSupply::<T>::insert(local, supply);
                StorageVersion::new(2).put::<Pallet<T>>();

                log::info!(
                    target: LOG_TARGET,
                    "Migrated to v2: chain {local} seeded with supply {supply}"
                );

                // 2 reads (version, total supply) + 4 writes (ids, ledger entry, version)
                T::DbWeight::get().reads_writes(2, 4)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v2 migration"
                );

                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );

            Ok((on_chain_version, TotalSupply::<T>::get()).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (pre_version, pre_supply): (StorageVersion, u128) = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Post-upgrade: version changed from {:?} to {:?}",
                pre_version,
                post_version
            );

            if pre_version < 2 {
                frame_support::ensure!(
                    post_version >= 2,
                    sp_runtime::TryRuntimeError::Other("Migration to v2 did not complete")
                );
                frame_support::ensure!(
                    ChainSupply::<T>::get(LocalChain::get()) == pre_supply,
                    sp_runtime::TryRuntimeError::Other("Local chain supply not seeded")
                );
            }
            frame_support::ensure!(
                TotalSupply::<T>::get() == pre_supply,
                sp_runtime::TryRuntimeError::Other("Total supply changed during migration")
            );

            Ok(())
        }
    }
}
