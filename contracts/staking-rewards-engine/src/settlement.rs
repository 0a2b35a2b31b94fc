use crate::admin::{ensure_contract_active, verify_admin};
use crate::gateway::{GatewayError, TransferGatewayClient};
use crate::interface::SettlementOperations;
use crate::metrics::MetricsModule;
use crate::types::{
    Error, FailureReason, PlatformFeeConfig, SettlementReceipt, SettlementResult, WithdrawalRecord,
};
use soroban_sdk::{Address, Env, Symbol};

/// Fallback applied when the configured fee percentage is out of range
pub const DEFAULT_FEE_PERCENTAGE: u32 = 10;

pub struct SettlementModule;

impl SettlementOperations for SettlementModule {
    fn settle_withdrawal(
        env: Env,
        withdrawal: WithdrawalRecord,
        config: PlatformFeeConfig,
        gateway: Address,
        recipient: Address,
    ) -> Result<SettlementResult, Error> {
        ensure_contract_active(&env)?;
        verify_admin(&env)?;

        let result = Self::settle(&env, &withdrawal, &config, &gateway, &recipient);

        MetricsModule::record_settlement(&env, &result);

        match &result {
            SettlementResult::Completed(receipt) => env.events().publish(
                (Symbol::new(&env, "settled"), withdrawal.id),
                (receipt.net_amount, receipt.fee_amount),
            ),
            SettlementResult::Failed(reason) => env.events().publish(
                (Symbol::new(&env, "settle_failed"), withdrawal.id),
                reason.clone(),
            ),
        }

        Ok(result)
    }
}

// Helper functions
impl SettlementModule {
    /// Validate, compute the payout and run the single gateway transfer.
    /// Preconditions are checked in order before any gateway call; every
    /// failure is terminal and leaves the withdrawal's ledger status alone.
    pub fn settle(
        env: &Env,
        withdrawal: &WithdrawalRecord,
        config: &PlatformFeeConfig,
        gateway: &Address,
        recipient: &Address,
    ) -> SettlementResult {
        if withdrawal.amount <= 0 {
            return SettlementResult::Failed(FailureReason::InvalidAmount);
        }

        let treasury = match &config.treasury {
            Some(address) => address.clone(),
            None => return SettlementResult::Failed(FailureReason::MisconfiguredPlatform),
        };

        // Integer division floors the fee, so the payout is never overstated
        let fee_percentage = Self::effective_fee_percentage(config);
        let fee_amount = withdrawal.amount * fee_percentage as i128 / 100;
        let net_amount = withdrawal.amount - fee_amount;

        let client = TransferGatewayClient::new(env, gateway);

        // Precision is whatever the gateway reports, never assumed
        let decimals = client.decimals();
        let net_minimal_units = match Self::to_minimal_units(net_amount, decimals) {
            Some(units) => units,
            None => return SettlementResult::Failed(FailureReason::Unknown),
        };

        match client.try_transfer_from(
            &env.current_contract_address(),
            &treasury,
            recipient,
            &net_minimal_units,
        ) {
            Ok(Ok(())) => SettlementResult::Completed(SettlementReceipt {
                withdrawal_id: withdrawal.id,
                fee_amount,
                net_amount,
                net_minimal_units,
            }),
            Ok(Err(_)) => SettlementResult::Failed(FailureReason::Unknown),
            Err(Ok(error)) => SettlementResult::Failed(Self::classify_gateway_error(error)),
            Err(Err(_)) => SettlementResult::Failed(FailureReason::Unknown),
        }
    }

    /// Out-of-range configuration falls back to the platform default
    /// instead of failing the settlement
    pub fn effective_fee_percentage(config: &PlatformFeeConfig) -> u32 {
        if config.fee_percentage > 100 {
            DEFAULT_FEE_PERCENTAGE
        } else {
            config.fee_percentage
        }
    }

    /// Scale a whole-unit amount to the gateway's minimal units, floored.
    /// Returns `None` when the scaled value does not fit in an i128.
    pub fn to_minimal_units(amount: i128, decimals: u32) -> Option<i128> {
        10i128
            .checked_pow(decimals)
            .and_then(|scale| amount.checked_mul(scale))
    }

    /// Map structured gateway error codes to settlement failure reasons;
    /// anything unrecognized is an unknown terminal failure
    pub fn classify_gateway_error(error: soroban_sdk::Error) -> FailureReason {
        if error == soroban_sdk::Error::from_contract_error(GatewayError::InsufficientFunds as u32)
        {
            FailureReason::InsufficientFunds
        } else if error
            == soroban_sdk::Error::from_contract_error(GatewayError::UserRejected as u32)
        {
            FailureReason::UserRejected
        } else if error
            == soroban_sdk::Error::from_contract_error(GatewayError::AllowanceExceeded as u32)
        {
            FailureReason::NotYetApproved
        } else if error
            == soroban_sdk::Error::from_contract_error(GatewayError::NetworkUnavailable as u32)
        {
            FailureReason::NetworkError
        } else {
            FailureReason::Unknown
        }
    }
}
