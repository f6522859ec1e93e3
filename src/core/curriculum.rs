//! Curriculum reference data
//!
//! The fixed subject list (code, name, credits) for each of the eight semesters.
//! Grade entry and grade-sheet import look credits up here; they are never computed.

use crate::core::models::MAX_SEMESTERS;

/// A subject as listed in the curriculum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurriculumSubject {
    /// Subject code
    pub code: &'static str,
    /// Subject name
    pub name: &'static str,
    /// Credits
    pub credits: f64,
}

const fn subj(code: &'static str, name: &'static str, credits: f64) -> CurriculumSubject {
    CurriculumSubject {
        code,
        name,
        credits,
    }
}

const SEMESTER_1: &[CurriculumSubject] = &[
    subj("HS2121", "Professional English and Functional Skills", 4.0),
    subj("MA2122", "Calculus for Engineers", 4.0),
    subj("PH2123", "Engineering Physics", 3.0),
    subj("CY2124", "Engineering Chemistry", 3.0),
    subj("GE2C21", "Engineering Graphics", 4.0),
    subj("HS2C61", "Heritage of Tamils", 1.0),
    subj("GE2C81", "Engineering Practices Laboratory", 2.0),
    subj("BS2182", "Physics and Chemistry Laboratory", 2.0),
];

const SEMESTER_2: &[CurriculumSubject] = &[
    subj("HS2221", "Communicative English", 2.0),
    subj("EV2211", "Electronic Devices", 3.0),
    subj("MA2222", "Partial Differential Equations and Transforms", 4.0),
    subj("PH2213", "Materials Physics", 3.0),
    subj("GE2C25", "Problem Solving and Python Programming", 3.0),
    subj("EC2211", "Fundamentals of Electrical Engineering", 3.0),
    subj("HS2C62", "Tamils and Technology", 1.0),
    subj(
        "GE2C82",
        "Problem Solving and Python Programming Laboratory",
        2.0,
    ),
    subj("EV2281", "Electronic Devices Laboratory", 2.0),
    subj("HS2281", "Communication and Soft Skills Laboratory", 1.5),
];

const SEMESTER_3: &[CurriculumSubject] = &[
    subj("MA2321", "Probability and Statistics", 4.0),
    subj("EC2321", "Circuit Theory", 3.0),
    subj("EC2322", "Electromagnetic Fields", 3.0),
    subj("EC2323", "Digital System Design", 3.0),
    subj("EC2324", "Signals and Systems", 4.0),
    subj("EC2381", "Digital System Design Laboratory", 2.0),
    subj("EC2382", "Circuits and Signals Laboratory", 2.0),
    subj("HS2381", "Interpersonal Skills Laboratory", 1.0),
];

const SEMESTER_4: &[CurriculumSubject] = &[
    subj("MA2421", "Numerical Methods", 4.0),
    subj("EC2421", "Electronic Circuits", 3.0),
    subj("EC2422", "Control Systems", 3.0),
    subj("EC2423", "Microprocessors and Microcontrollers", 3.0),
    subj("EC2424", "Transmission Lines and Waveguides", 3.0),
    subj("EC2481", "Electronic Circuits Laboratory", 2.0),
    subj("EC2482", "Microprocessors Laboratory", 2.0),
    subj("GE2481", "Environmental Science", 2.0),
];

const SEMESTER_5: &[CurriculumSubject] = &[
    subj("EC2521", "Linear Integrated Circuits", 3.0),
    subj("EC2522", "VLSI Design", 3.0),
    subj("EC2523", "Digital Signal Processing", 4.0),
    subj("EC2524", "Antennas and Microwave Engineering", 3.0),
    subj("EC2525", "Communication Systems", 3.0),
    subj("EC2581", "VLSI Laboratory", 2.0),
    subj("EC2582", "DSP Laboratory", 2.0),
    subj("EC2583", "Communication Systems Laboratory", 2.0),
];

const SEMESTER_6: &[CurriculumSubject] = &[
    subj("EC2621", "Analog VLSI Design", 3.0),
    subj("EC2622", "Digital VLSI Design", 3.0),
    subj("EC2623", "ASIC Design", 3.0),
    subj("EC2624", "Testing and Verification of VLSI Circuits", 3.0),
    subj("EC2625", "Embedded Systems", 3.0),
    subj("EC2681", "Analog VLSI Laboratory", 2.0),
    subj("EC2682", "Digital VLSI Laboratory", 2.0),
    subj("EC2683", "Embedded Systems Laboratory", 2.0),
];

const SEMESTER_7: &[CurriculumSubject] = &[
    subj("EC2721", "Low Power VLSI Design", 3.0),
    subj("EC2722", "System on Chip Design", 3.0),
    subj("EC2723", "VLSI Signal Processing", 3.0),
    subj("EC2724", "RF VLSI Design", 3.0),
    subj("EC2725", "MEMS and NEMS", 3.0),
    subj("EC2781", "VLSI CAD Laboratory", 2.0),
    subj("EC2782", "MEMS Laboratory", 2.0),
    subj("GE2781", "Professional Ethics", 2.0),
];

const SEMESTER_8: &[CurriculumSubject] = &[
    subj("EC2821", "VLSI Physical Design", 3.0),
    subj("EC2822", "Design for Testability", 3.0),
    subj("EC2823", "Nanoelectronics", 3.0),
    subj("EC2824", "Hardware Security", 3.0),
    subj("EC2881", "Project Work", 6.0),
    subj("EC2882", "Comprehensive Viva Voce", 2.0),
];

/// Subjects offered in a semester, or `None` for a number outside 1..=8
#[must_use]
pub const fn semester_subjects(semester_no: u8) -> Option<&'static [CurriculumSubject]> {
    match semester_no {
        1 => Some(SEMESTER_1),
        2 => Some(SEMESTER_2),
        3 => Some(SEMESTER_3),
        4 => Some(SEMESTER_4),
        5 => Some(SEMESTER_5),
        6 => Some(SEMESTER_6),
        7 => Some(SEMESTER_7),
        8 => Some(SEMESTER_8),
        _ => None,
    }
}

/// Find a subject by code in any semester, returning it with its semester number
#[must_use]
pub fn find_subject(code: &str) -> Option<(u8, &'static CurriculumSubject)> {
    let code = code.trim();
    (1..=MAX_SEMESTERS).find_map(|no| {
        semester_subjects(no)?
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code))
            .map(|s| (no, s))
    })
}

/// Total credits offered in a semester (0 for an unknown semester)
#[must_use]
pub fn semester_credits(semester_no: u8) -> f64 {
    semester_subjects(semester_no).map_or(0.0, |subjects| subjects.iter().map(|s| s.credits).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_semester_has_subjects() {
        for no in 1..=MAX_SEMESTERS {
            let subjects = semester_subjects(no).unwrap();
            assert!(!subjects.is_empty(), "semester {no} is empty");
            assert!(subjects.iter().all(|s| s.credits > 0.0));
        }
        assert!(semester_subjects(0).is_none());
        assert!(semester_subjects(9).is_none());
    }

    #[test]
    fn test_find_subject_across_semesters() {
        let (no, subject) = find_subject("hs2281").unwrap();
        assert_eq!(no, 2);
        assert_eq!(subject.name, "Communication and Soft Skills Laboratory");
        assert!((subject.credits - 1.5).abs() < f64::EPSILON);

        assert!(find_subject("XX0000").is_none());
    }

    #[test]
    fn test_semester_credits() {
        assert!((semester_credits(1) - 23.0).abs() < f64::EPSILON);
        assert!((semester_credits(8) - 20.0).abs() < f64::EPSILON);
        assert!(semester_credits(9).abs() < f64::EPSILON);
    }
}
