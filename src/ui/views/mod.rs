pub mod apply;
pub mod ledger;
