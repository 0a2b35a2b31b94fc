use crate::interface::AdminOperations;
use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env};

pub fn verify_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(())
}

pub fn ensure_contract_active(env: &Env) -> Result<(), Error> {
    if AdminModule::is_contract_paused(env) {
        return Err(Error::ContractPaused);
    }
    Ok(())
}

pub struct AdminModule;

impl AdminOperations for AdminModule {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        // Check if contract is already initialized
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);

        // Initialize contract as active
        env.storage()
            .instance()
            .set(&DataKey::ContractPaused, &false);

        Ok(())
    }

    fn get_admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage().instance().set(&DataKey::Admin, &new_admin);
        Ok(())
    }

    fn pause_contract(env: Env) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage()
            .instance()
            .set(&DataKey::ContractPaused, &true);
        Ok(())
    }

    fn resume_contract(env: Env) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage()
            .instance()
            .set(&DataKey::ContractPaused, &false);
        Ok(())
    }

    fn get_paused_state(env: Env) -> Result<bool, Error> {
        Ok(Self::is_contract_paused(&env))
    }
}

// Helper functions
impl AdminModule {
    pub fn is_contract_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::ContractPaused)
            .unwrap_or(false)
    }
}
