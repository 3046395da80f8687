pub mod assembler;
pub mod document;
pub mod library;
pub mod lookup;
pub mod naming;
pub mod slot;

pub use assembler::TemplateAssembler;
pub use document::PsaDocument;
pub use library::CalcTemplateLibrary;
pub use lookup::{CalcOutput, VariableLookupTable};
pub use slot::{ordinal_at, SensorSlot};
