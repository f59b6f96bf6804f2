// Integration tests for the 'abre' facade and the three constructions
// behind it.

mod util;
mod validation;
