//! Bundled curriculum (regulation 2017 style codes).
//!
//! Rows are `(code, display name, credits)`. Semesters 1 and 2 are the
//! common first year shared by every department.

use crate::Department;

pub(super) type SubjectRow = (&'static str, &'static str, u32);
pub(super) type SemesterRows = (u8, &'static [SubjectRow]);

pub(super) const FIRST_YEAR: &[SemesterRows] = &[
    (
        1,
        &[
            ("HS8151", "Communicative English", 4),
            ("MA8151", "Engineering Mathematics - I", 4),
            ("PH8151", "Engineering Physics", 3),
            ("CY8151", "Engineering Chemistry", 3),
            ("GE8161", "Problem Solving and Python Programming Laboratory", 2),
            ("BS8161", "Physics and Chemistry Laboratory", 2),
        ],
    ),
    (
        2,
        &[
            ("HS8251", "Technical English", 4),
            ("MA8251", "Engineering Mathematics - II", 4),
            ("GE8152", "Engineering Graphics", 4),
            ("GE8151", "Problem Solving and Python Programming", 3),
            ("GE8291", "Environmental Science and Engineering", 3),
            ("GE8261", "Engineering Practices Laboratory", 2),
        ],
    ),
];

const CIVIL: &[SemesterRows] = &[
    (
        3,
        &[
            ("MA8353", "Transforms and Partial Differential Equations", 4),
            ("CE8301", "Strength of Materials I", 3),
            ("CE8302", "Fluid Mechanics", 3),
            ("CE8351", "Surveying", 3),
            ("CE8391", "Construction Materials", 3),
            ("CE8392", "Engineering Geology", 3),
            ("CE8311", "Construction Materials Laboratory", 2),
            ("CE8361", "Surveying Laboratory", 2),
        ],
    ),
    (
        4,
        &[
            ("MA8491", "Numerical Methods", 4),
            ("CE8401", "Construction Techniques and Practices", 3),
            ("CE8402", "Strength of Materials II", 3),
            ("CE8403", "Applied Hydraulic Engineering", 4),
            ("CE8404", "Concrete Technology", 3),
            ("CE8491", "Soil Mechanics", 3),
            ("CE8481", "Strength of Materials Laboratory", 2),
        ],
    ),
    (
        5,
        &[
            ("CE8501", "Design of Reinforced Cement Concrete Elements", 3),
            ("CE8502", "Structural Analysis I", 3),
            ("EN8491", "Water Supply Engineering", 3),
            ("CE8591", "Foundation Engineering", 3),
            ("CE8511", "Soil Mechanics Laboratory", 2),
            ("CE8512", "Water and Waste Water Analysis Laboratory", 2),
        ],
    ),
    (
        6,
        &[
            ("CE8601", "Design of Steel Structural Elements", 3),
            ("CE8602", "Structural Analysis II", 3),
            ("CE8603", "Irrigation Engineering", 3),
            ("CE8604", "Highway Engineering", 3),
            ("EN8592", "Wastewater Engineering", 3),
            ("CE8611", "Highway Engineering Laboratory", 2),
        ],
    ),
    (
        7,
        &[
            ("CE8701", "Estimation, Costing and Valuation Engineering", 3),
            ("CE8702", "Railways, Airports, Docks and Harbour Engineering", 3),
            ("CE8703", "Structural Design and Drawing", 4),
            ("CE8711", "Creative and Innovative Project", 2),
            ("CE8712", "Industrial Training", 1),
        ],
    ),
];

const MECH: &[SemesterRows] = &[
    (
        3,
        &[
            ("MA8353", "Transforms and Partial Differential Equations", 4),
            ("ME8391", "Engineering Thermodynamics", 3),
            ("CE8394", "Fluid Mechanics and Machinery", 4),
            ("ME8351", "Manufacturing Technology I", 3),
            ("EE8353", "Electrical Drives and Controls", 3),
            ("ME8361", "Manufacturing Technology Laboratory I", 2),
            ("ME8381", "Computer Aided Machine Drawing", 2),
        ],
    ),
    (
        4,
        &[
            ("MA8452", "Statistics and Numerical Methods", 4),
            ("ME8492", "Kinematics of Machinery", 3),
            ("ME8451", "Manufacturing Technology II", 3),
            ("ME8491", "Engineering Metallurgy", 3),
            ("CE8395", "Strength of Materials for Mechanical Engineers", 3),
            ("ME8493", "Thermal Engineering I", 3),
            ("ME8462", "Manufacturing Technology Laboratory II", 2),
        ],
    ),
    (
        5,
        &[
            ("ME8595", "Thermal Engineering II", 3),
            ("ME8593", "Design of Machine Elements", 3),
            ("ME8501", "Metrology and Measurements", 3),
            ("ME8594", "Dynamics of Machines", 4),
            ("ME8511", "Kinematics and Dynamics Laboratory", 2),
            ("ME8512", "Thermal Engineering Laboratory", 2),
        ],
    ),
    (
        6,
        &[
            ("ME8651", "Design of Transmission Systems", 3),
            ("ME8691", "Computer Aided Design and Manufacturing", 3),
            ("ME8693", "Heat and Mass Transfer", 4),
            ("ME8692", "Finite Element Analysis", 4),
            ("ME8694", "Hydraulics and Pneumatics", 3),
            ("ME8681", "CAD/CAM Laboratory", 2),
        ],
    ),
    (
        7,
        &[
            ("ME8792", "Power Plant Engineering", 3),
            ("ME8793", "Process Planning and Cost Estimation", 3),
            ("ME8791", "Mechatronics", 3),
            ("GE8077", "Total Quality Management", 3),
            ("ME8711", "Simulation and Analysis Laboratory", 2),
            ("ME8781", "Mechatronics Laboratory", 2),
        ],
    ),
];

const EEE: &[SemesterRows] = &[
    (
        3,
        &[
            ("MA8353", "Transforms and Partial Differential Equations", 4),
            ("EE8351", "Digital Logic Circuits", 3),
            ("EE8391", "Electromagnetic Theory", 3),
            ("EE8301", "Electrical Machines I", 3),
            ("EC8353", "Electron Devices and Circuits", 3),
            ("ME8792", "Power Plant Engineering", 3),
            ("EE8311", "Electrical Machines Laboratory I", 2),
        ],
    ),
    (
        4,
        &[
            ("MA8491", "Numerical Methods", 4),
            ("EE8401", "Electrical Machines II", 3),
            ("EE8402", "Transmission and Distribution", 3),
            ("EE8403", "Measurements and Instrumentation", 3),
            ("EE8451", "Linear Integrated Circuits and Applications", 3),
            ("IC8451", "Control Systems", 3),
            ("EE8411", "Electrical Machines Laboratory II", 2),
        ],
    ),
    (
        5,
        &[
            ("EE8501", "Power System Analysis", 3),
            ("EE8551", "Microprocessors and Microcontrollers", 3),
            ("EE8552", "Power Electronics", 3),
            ("EE8591", "Digital Signal Processing", 3),
            ("CS8392", "Object Oriented Programming", 3),
            ("EE8511", "Control and Instrumentation Laboratory", 2),
        ],
    ),
    (
        6,
        &[
            ("EE8601", "Solid State Drives", 3),
            ("EE8602", "Protection and Switchgear", 3),
            ("EE8691", "Embedded Systems", 3),
            ("EE8661", "Power Electronics and Drives Laboratory", 2),
            ("EE8681", "Microprocessors and Microcontrollers Laboratory", 2),
        ],
    ),
    (
        7,
        &[
            ("EE8701", "High Voltage Engineering", 3),
            ("EE8702", "Power System Operation and Control", 3),
            ("EE8703", "Renewable Energy Systems", 3),
            ("OMD551", "Basics of Biomedical Instrumentation", 3),
            ("EE8711", "Power System Simulation Laboratory", 2),
            ("EE8712", "Renewable Energy Systems Laboratory", 2),
        ],
    ),
];

const ECE: &[SemesterRows] = &[
    (
        3,
        &[
            ("MA8352", "Linear Algebra and Partial Differential Equations", 4),
            ("EC8393", "Fundamentals of Data Structures in C", 3),
            ("EC8351", "Electronic Circuits I", 3),
            ("EC8352", "Signals and Systems", 4),
            ("EC8392", "Digital Electronics", 3),
            ("EC8391", "Control Systems Engineering", 3),
            ("EC8381", "Fundamentals of Data Structures in C Laboratory", 2),
        ],
    ),
    (
        4,
        &[
            ("MA8451", "Probability and Random Processes", 4),
            ("EC8452", "Electronic Circuits II", 3),
            ("EC8491", "Communication Theory", 3),
            ("EC8451", "Electromagnetic Fields", 4),
            ("EC8453", "Linear Integrated Circuits", 3),
            ("EC8461", "Circuits Design and Simulation Laboratory", 2),
        ],
    ),
    (
        5,
        &[
            ("EC8501", "Digital Communication", 3),
            ("EC8553", "Discrete-Time Signal Processing", 4),
            ("EC8552", "Computer Architecture and Organization", 3),
            ("EC8551", "Communication Networks", 3),
            ("EC8561", "Communication Systems Laboratory", 2),
            ("EC8562", "Digital Signal Processing Laboratory", 2),
        ],
    ),
    (
        6,
        &[
            ("EC8691", "Microprocessors and Microcontrollers", 3),
            ("EC8095", "VLSI Design", 3),
            ("EC8652", "Wireless Communication", 3),
            ("MG8591", "Principles of Management", 3),
            ("EC8651", "Transmission Lines and RF Systems", 3),
            ("EC8681", "Microprocessors and Microcontrollers Laboratory", 2),
        ],
    ),
    (
        7,
        &[
            ("EC8701", "Antennas and Microwave Engineering", 3),
            ("EC8751", "Optical Communication", 3),
            ("EC8791", "Embedded and Real Time Systems", 3),
            ("EC8792", "Ad hoc and Wireless Sensor Networks", 3),
            ("EC8711", "Embedded Laboratory", 2),
            ("EC8761", "Advanced Communication Laboratory", 2),
        ],
    ),
];

const CSE: &[SemesterRows] = &[
    (
        3,
        &[
            ("MA8351", "Discrete Mathematics", 4),
            ("CS8351", "Digital Principles and System Design", 4),
            ("CS8391", "Data Structures", 3),
            ("CS8392", "Object Oriented Programming", 3),
            ("EC8395", "Communication Engineering", 3),
            ("CS8381", "Data Structures Laboratory", 2),
            ("CS8383", "Object Oriented Programming Laboratory", 2),
        ],
    ),
    (
        4,
        &[
            ("MA8402", "Probability and Queueing Theory", 4),
            ("CS8491", "Computer Architecture", 3),
            ("CS8492", "Database Management Systems", 3),
            ("CS8451", "Design and Analysis of Algorithms", 3),
            ("CS8493", "Operating Systems", 3),
            ("CS8481", "Database Management Systems Laboratory", 2),
            ("CS8461", "Operating Systems Laboratory", 2),
        ],
    ),
    (
        5,
        &[
            ("MA8551", "Algebra and Number Theory", 4),
            ("CS8591", "Computer Networks", 3),
            ("EC8691", "Microprocessors and Microcontrollers", 3),
            ("CS8501", "Theory of Computation", 3),
            ("CS8592", "Object Oriented Analysis and Design", 3),
            ("CS8581", "Networks Laboratory", 2),
        ],
    ),
    (
        6,
        &[
            ("CS8651", "Internet Programming", 3),
            ("CS8691", "Artificial Intelligence", 3),
            ("CS8601", "Mobile Computing", 3),
            ("CS8602", "Compiler Design", 4),
            ("CS8603", "Distributed Systems", 3),
            ("CS8661", "Mobile Application Development Laboratory", 2),
        ],
    ),
    (
        7,
        &[
            ("MG8591", "Principles of Management", 3),
            ("CS8792", "Cryptography and Network Security", 3),
            ("CS8791", "Cloud Computing", 3),
            ("CS8711", "Cloud Computing Laboratory", 2),
            ("IT8761", "Security Laboratory", 2),
        ],
    ),
];

/// Department-specific semesters (3 onward).
pub(super) const fn department_rows(department: Department) -> &'static [SemesterRows] {
    match department {
        Department::Civil => CIVIL,
        Department::Mech => MECH,
        Department::Eee => EEE,
        Department::Ece => ECE,
        Department::Cse => CSE,
    }
}
