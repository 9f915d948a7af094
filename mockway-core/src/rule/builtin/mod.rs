pub mod mock_routes;

pub use mock_routes::MockRoutesRule;
