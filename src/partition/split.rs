//! # Scope split of an input collection.
//!
//! [`split_inputs`] turns one feed snapshot into the two render-ready groups.
//!
//! ## Rules
//! - Every input lands in exactly one group, decided by its scope flag.
//! - Each group is sorted by [`natural_cmp`] on the title with a **stable**
//!   sort and no secondary key: inputs with equal titles keep their relative
//!   order from the incoming collection.
//! - The split is a full recompute; callers replace their previous groups
//!   wholesale.

use crate::model::Input;

use super::natural::natural_cmp;

/// Splits a snapshot collection into `(global, local)` groups, each sorted in
/// natural title order.
///
/// Together the two groups contain exactly the inputs that were passed in;
/// no entry is duplicated or silently dropped (a malformed scope flag cannot
/// reach this point - it is rejected when the entity is decoded).
pub fn split_inputs(inputs: Vec<Input>) -> (Vec<Input>, Vec<Input>) {
    let (mut global, mut local): (Vec<Input>, Vec<Input>) =
        inputs.into_iter().partition(Input::is_global);

    global.sort_by(|a, b| natural_cmp(&a.title, &b.title));
    local.sort_by(|a, b| natural_cmp(&a.title, &b.title));

    (global, local)
}
