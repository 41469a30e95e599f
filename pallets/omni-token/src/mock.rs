use crate as pallet_omni_token;
use crate::{ChainId, CrossChainTransport, DebitQuote, DustRemoval, TransferMessage};
use frame_support::{
    derive_impl,
    dispatch::DispatchResult,
    parameter_types,
    traits::{ConstU32, ConstU64, Contains, Get},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError,
};
use std::{cell::RefCell, marker::PhantomData};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        OmniToken: pallet_omni_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1000>;
    type WeightInfo = ();
}

pub const HOME_CHAIN: ChainId = 1;
pub const REMOTE_CHAIN: ChainId = 2;
pub const GLOBAL_CAP: u128 = 10_000_000;
/// Milliseconds; 1_700_000_000 seconds.
pub const GENESIS_MOMENT: u64 = 1_700_000_000_000;

parameter_types! {
    pub const AdminAccount: u64 = 1;
    pub const TransportAccount: u64 = 99;
    /// Decimal conversion rate applied by the mock transport (1 = lossless).
    pub static DustRate: u128 = 1;
    /// Taken off the destination-side amount, as a transport fee or rate loss would.
    pub static ReceiveShortfall: u128 = 0;
    /// Make the transport refuse outbound messages.
    pub static TransportDown: bool = false;
    /// Units of local value per unit carried by a delivered message.
    pub static CreditScale: u128 = 1;
}

/// Chains the mock transport serves.
pub struct MockPeers;
impl Contains<ChainId> for MockPeers {
    fn contains(chain: &ChainId) -> bool {
        *chain == HOME_CHAIN || *chain == REMOTE_CHAIN
    }
}

type MockAdapter = DustRemoval<DustRate, MockPeers>;

/// Accepts exactly one signed account.
pub struct EnsureAccount<Who>(PhantomData<Who>);
impl<Who: Get<u64>> frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureAccount<Who> {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == Who::get() => Ok(account),
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(Who::get()))
    }
}

thread_local! {
    static OUTBOX: RefCell<Vec<TransferMessage<u64, H256>>> = RefCell::new(Vec::new());
}

/// Dust-removing transport serving two chains that queues outbound messages for the test to relay by hand.
pub struct MockTransport;
impl CrossChainTransport<u64, H256> for MockTransport {
    fn is_peer_reachable(chain: ChainId) -> bool {
        <MockAdapter as CrossChainTransport<u64, H256>>::is_peer_reachable(chain)
    }

    fn quote_debit(amount: u128, destination: ChainId) -> DebitQuote {
        let quote =
            <MockAdapter as CrossChainTransport<u64, H256>>::quote_debit(amount, destination);
        DebitQuote {
            amount_sent: quote.amount_sent,
            amount_received: quote.amount_received.saturating_sub(ReceiveShortfall::get()),
        }
    }

    fn send(message: &TransferMessage<u64, H256>) -> DispatchResult {
        if TransportDown::get() {
            return Err(DispatchError::Other("transport unavailable"));
        }
        OUTBOX.with(|outbox| outbox.borrow_mut().push(message.clone()));
        Ok(())
    }

    fn quote_credit(amount: u128, _source: ChainId) -> u128 {
        amount.saturating_mul(CreditScale::get())
    }
}

/// Drain every message the transport accepted so far.
pub fn take_outbox() -> Vec<TransferMessage<u64, H256>> {
    OUTBOX.with(|outbox| outbox.take())
}

impl pallet_omni_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = EnsureAccount<AdminAccount>;
    type TransportOrigin = EnsureAccount<TransportAccount>;
    type Transport = MockTransport;
    type TimeProvider = Timestamp;
    type WeightInfo = ();
}

/// Home chain instance with balances for accounts 2 and 3.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(HOME_CHAIN, GLOBAL_CAP, vec![(2, 1_000_000), (3, 500_000)])
}

/// Non-home chain instance; it starts empty since only the home chain issues supply.
pub fn new_remote_ext() -> sp_io::TestExternalities {
    build_ext(REMOTE_CHAIN, GLOBAL_CAP, vec![])
}

/// Home chain instance with an arbitrary cap and no initial balances.
pub fn new_capped_ext(global_cap: u128) -> sp_io::TestExternalities {
    build_ext(HOME_CHAIN, global_cap, vec![])
}

// Build genesis storage according to the mock runtime.
fn build_ext(
    local_chain_id: ChainId,
    global_cap: u128,
    initial_balances: Vec<(u64, u128)>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_omni_token::GenesisConfig::<Test> {
        token_name: b"Test Token".to_vec(),
        token_symbol: b"TST".to_vec(),
        decimals: 6,
        global_cap,
        home_chain_id: HOME_CHAIN,
        local_chain_id,
        initial_balances,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    DustRate::set(1);
    ReceiveShortfall::set(0);
    TransportDown::set(false);
    CreditScale::set(1);
    take_outbox();

    let mut ext: sp_io::TestExternalities = t.into();
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(GENESIS_MOMENT);
    });
    ext
}
