mod defaults;
mod persistence;
mod store;

pub use defaults::starter_recipes;
pub use persistence::{load_store, save_store};
pub use store::{RecordStore, StoreData};
