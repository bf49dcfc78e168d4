//! Value movement through the campaign's token contract.
//!
//! Every call here leaves this contract. A failed transfer traps the whole
//! invocation, and the host discards every storage write made before it.

use soroban_sdk::{token, Address, Env};

/// Pull `amount` of `asset` from `from` into this contract.
pub fn collect(env: &Env, asset: &Address, from: &Address, amount: i128) {
    token::Client::new(env, asset).transfer(from, &env.current_contract_address(), &amount);
}

/// Pay `amount` of `asset` from this contract to `to`.
pub fn pay_out(env: &Env, asset: &Address, to: &Address, amount: i128) {
    token::Client::new(env, asset).transfer(&env.current_contract_address(), to, &amount);
}


/// Token balance `account` holds, as reported by the token contract.
pub fn balance_of(env: &Env, asset: &Address, account: &Address) -> i128 {
    token::Client::new(env, asset).balance(account)
}
