pub mod order_number;
pub mod product_filter;
pub mod slug;
pub mod whatsapp;

pub use order_number::{generate_order_number, normalize_order_number};
pub use product_filter::filter_and_sort;
pub use slug::slugify;
