mod config_roundtrip;
mod layout_scenarios;
mod serialization;
