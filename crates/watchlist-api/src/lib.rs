pub mod error;
pub mod flows;
pub mod server;
pub mod traits;

pub use error::ApiError;
pub use flows::{add_to_shared_list, AddOutcome};
pub use server::ServerClient;
pub use traits::SharedListBackend;
