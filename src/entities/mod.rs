//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod file_record;

pub use file_record::{
    ActiveModel as FileRecordActiveModel, Column as FileRecordColumn, Entity as FileRecord,
    Model as FileRecordModel,
};
