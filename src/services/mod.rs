mod auth_service;
mod cart_service;
mod mongodb;
mod order_service;
pub mod storage_service;

pub use auth_service::{AuthService, Claims};
pub use cart_service::CartService;
pub use mongodb::MongoDBService;
pub use order_service::OrderService;
pub use storage_service::{StorageService, MAX_UPLOAD_BYTES};
