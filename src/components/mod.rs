//! Stateless presentational components shared by the list views.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are rendering units only: props in, markup out. Orchestration and
//! derivation stay in `pages` and `util`, so both list views draw from one
//! component library instead of re-declaring their own chrome.

pub mod booking_card;
pub mod button;
pub mod card;
pub mod pagination;
pub mod proposal_card;
pub mod search_input;
