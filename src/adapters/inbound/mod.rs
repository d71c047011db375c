mod console;

pub use console::ConsoleUi;
