use soroban_sdk::{contractclient, contracterror, Address, Env};

/// Failure codes a conforming gateway reports as contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GatewayError {
    InsufficientFunds = 1,  // Treasury balance cannot cover the transfer
    UserRejected = 2,       // Recipient-side rejection
    AllowanceExceeded = 3,  // Spender not approved for this transfer
    NetworkUnavailable = 4, // External settlement leg unreachable
}

/// Transfer capability the surrounding system injects by address.
/// Signature-compatible with the SEP-41 token subset the engine needs, so
/// any standard token contract satisfies it.
#[contractclient(name = "TransferGatewayClient")]
pub trait TransferGateway {
    /// Fractional precision of the settlement token
    fn decimals(env: Env) -> u32;

    /// Move `amount` minimal units from `from` to `to`, spending `spender`'s
    /// allowance. Fails with a `GatewayError` code when the cause is known.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
}
