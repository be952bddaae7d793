mod create_director;
mod delete_director;
mod update_director;
mod util;

use create_director::*;
use delete_director::*;
use update_director::*;
pub use util::*;
