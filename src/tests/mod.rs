mod config_unit;
mod record_unit;
