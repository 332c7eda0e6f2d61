pub mod compensation;
pub mod structure;

pub use compensation::EmployeeCompensationService;
pub use structure::SalaryStructureService;
