pub mod inventory_check;
pub mod run;
