//! Configuration section definitions.
//!
//! | Section     | Purpose                                   |
//! |-------------|-------------------------------------------|
//! | `[paths]`   | Content, data and image directories       |
//! | `[cars]`    | Car normalization defaults                |
//! | `[contact]` | Reservation message and WhatsApp settings |

mod cars;
mod contact;
mod paths;

pub use cars::CarsConfig;
pub use contact::ContactConfig;
pub use paths::{CARS_INDEX, CONTACTS_INDEX, PathsConfig};
