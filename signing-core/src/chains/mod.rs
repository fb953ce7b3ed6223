// signing-core/src/chains/mod.rs

pub mod evm;
