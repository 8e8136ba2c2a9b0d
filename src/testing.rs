pub mod filter_contract;
