pub mod align;
pub mod io;
pub mod seq;
