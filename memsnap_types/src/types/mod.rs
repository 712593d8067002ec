mod key;
mod opt_value;
mod table_id;
mod value;

pub use key::*;
pub use opt_value::*;
pub use table_id::*;
pub use value::*;
