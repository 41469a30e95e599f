//! Hooks consumed from the cross-chain messaging transport.
//!
//! The pallet never moves messages itself. On the way out it asks the transport how much of a
//! requested amount will actually travel, burns exactly that, and passes the resulting
//! [`TransferMessage`] on. On the way in the transport calls `receive` through its own origin
//! after it has validated the message, and tells the pallet how much the delivered amount is
//! worth locally. Delivery order, retries and authentication belong to the transport.

use codec::{Decode, Encode};
use frame_support::{
    dispatch::DispatchResult,
    traits::{Contains, Everything, Get},
};
use scale_info::TypeInfo;
use sp_std::marker::PhantomData;

use crate::ChainId;

/// What the transport will actually move for an outbound request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DebitQuote {
    /// Deducted from the sender on the source chain.
    pub amount_sent: u128,
    /// Credited to the recipient on the destination chain.
    pub amount_received: u128,
}

/// Outbound transfer as handed to the transport once the debit has committed.
#[derive(Clone, PartialEq, Eq, Debug, Encode, Decode, TypeInfo)]
pub struct TransferMessage<AccountId, Hash> {
    pub correlation_id: Hash,
    pub sender: AccountId,
    pub recipient: AccountId,
    pub source_chain: ChainId,
    pub destination_chain: ChainId,
    pub amount: u128,
}

pub trait CrossChainTransport<AccountId, Hash> {
    /// Whether a message towards `chain` can be delivered at all.
    ///
    /// A debit is irreversible once it commits, so a destination the transport does not serve
    /// must be refused here rather than accepted and lost.
    fn is_peer_reachable(chain: ChainId) -> bool;

    /// Adjust a requested amount to what the transport can carry to `destination`.
    fn quote_debit(amount: u128, destination: ChainId) -> DebitQuote;

    /// Hand a committed debit over for delivery. An error rejects the whole debit.
    fn send(message: &TransferMessage<AccountId, Hash>) -> DispatchResult;

    /// Local value of an `amount` delivered from `source`; this is what gets credited.
    fn quote_credit(amount: u128, source: ChainId) -> u128;
}

/// Lossless transport; messages are picked up by relayers from `TransferSent` events.
///
/// It serves every non-zero chain identifier. Runtimes with a fixed set of peers should use
/// [`DustRemoval`] with a `Peers` filter, or their own adapter.
impl<AccountId, Hash> CrossChainTransport<AccountId, Hash> for () {
    fn is_peer_reachable(_chain: ChainId) -> bool {
        true
    }

    fn quote_debit(amount: u128, _destination: ChainId) -> DebitQuote {
        DebitQuote { amount_sent: amount, amount_received: amount }
    }

    fn send(_message: &TransferMessage<AccountId, Hash>) -> DispatchResult {
        Ok(())
    }

    fn quote_credit(amount: u128, _source: ChainId) -> u128 {
        amount
    }
}

/// Transport with fewer decimals of precision than the token uses locally.
///
/// `Rate` is the decimal conversion rate (see [`conversion_rate`]). Anything below it is dust:
/// it is not sent and stays with the sender. Amounts keep the local denomination on the wire,
/// so a delivery is credited as is. `Peers` lists the chains the transport serves. Like `()`,
/// message pickup happens off-chain.
pub struct DustRemoval<Rate, Peers = Everything>(PhantomData<(Rate, Peers)>);

impl<AccountId, Hash, Rate, Peers> CrossChainTransport<AccountId, Hash> for DustRemoval<Rate, Peers>
where
    Rate: Get<u128>,
    Peers: Contains<ChainId>,
{
    fn is_peer_reachable(chain: ChainId) -> bool {
        Peers::contains(&chain)
    }

    fn quote_debit(amount: u128, _destination: ChainId) -> DebitQuote {
        let amount = remove_dust(amount, Rate::get());
        DebitQuote { amount_sent: amount, amount_received: amount }
    }

    fn send(_message: &TransferMessage<AccountId, Hash>) -> DispatchResult {
        Ok(())
    }

    fn quote_credit(amount: u128, _source: ChainId) -> u128 {
        amount
    }
}

/// `10^(local_decimals - shared_decimals)`, or 1 when the transport is at least as precise.
pub fn conversion_rate(local_decimals: u8, shared_decimals: u8) -> u128 {
    10u128.saturating_pow(local_decimals.saturating_sub(shared_decimals) as u32)
}

/// Round `amount` down to a multiple of `rate`.
pub fn remove_dust(amount: u128, rate: u128) -> u128 {
    if rate <= 1 {
        return amount;
    }
    amount - amount % rate
}
