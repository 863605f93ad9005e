use std::collections::BTreeSet;

use anchor_lang::prelude::*;

/// Answers whether an actor may perform administrative actions such as pool creation.
pub trait Authority {
    fn is_admin(&self, actor: &Pubkey) -> bool;
}

/// A single owner key.
impl Authority for Pubkey {
    fn is_admin(&self, actor: &Pubkey) -> bool {
        self == actor
    }
}

impl Authority for BTreeSet<Pubkey> {
    fn is_admin(&self, actor: &Pubkey) -> bool {
        self.contains(actor)
    }
}
