pub mod prelude;

pub mod products;
pub mod users;
