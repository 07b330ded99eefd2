mod shell;
pub use shell::AppShell;

mod login;
pub use login::LoginPage;

mod register;
pub use register::RegisterPage;

mod cars;
pub use cars::CarsPage;

mod car_details;
pub use car_details::CarDetailsPage;

mod car_form;
pub use car_form::{CarEditPage, CarNewPage};

mod rentals;
pub use rentals::RentalsPage;

mod rental_details;
pub use rental_details::RentalDetailsPage;

mod rental_form;
pub use rental_form::RentalNewPage;

mod customers;
pub use customers::CustomersPage;

mod customer_details;
pub use customer_details::CustomerDetailsPage;

mod reports;
pub use reports::ReportsPage;

mod admin;
pub use admin::AdminPage;
