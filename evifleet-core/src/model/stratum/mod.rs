mod stratum_key;

pub use stratum_key::StratumKey;
