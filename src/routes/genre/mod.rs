mod create_genre;
mod delete_genre;
mod update_genre;
mod util;

use create_genre::*;
use delete_genre::*;
use update_genre::*;
pub use util::*;
