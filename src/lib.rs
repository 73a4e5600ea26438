pub mod config;
pub mod domain {
    pub mod payment;
    pub mod transaction;
    pub mod validation;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod error;
    pub mod handlers {
        pub mod payments;
        pub mod transactions;
        pub mod transfers;
    }
    pub mod routes;
}
pub mod repo {
    pub mod transactions_repo;
    pub mod users_repo;
}
pub mod service {
    pub mod payment_service;
    pub mod reference;
}

pub use error::{Error, Result};

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}
