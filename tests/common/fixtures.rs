//! Reusable file contents

pub const CATEGORIES: &str = "Tools\nElectronics\nFurniture\n";

pub const LOCATIONS: &str = "Garage, detached\nOffice, 2nd floor\nShed\n";

/// Three assets; the drill's warranty ended 2024-05-31
pub const THREE_ASSETS: &str = "\
Drill, Tools, Garage, 2022-05-31, cordless, 120, 2024-05-31
Laptop, Electronics, Office, 2023-01-10, No description provided, 1500, 2026-01-10
Desk, Furniture, Office, No date provided, No description provided, No value provided, No date provided
";
