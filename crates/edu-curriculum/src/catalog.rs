//! Built-in catalog shipped with the portal.

use std::collections::BTreeMap;

use crate::curriculum::{ClassLevel, Curriculum, Subject, Topic};

fn subject(id: &str, name: &str, icon: &str) -> Subject {
    Subject {
        id: id.to_owned(),
        name: name.to_owned(),
        icon: icon.to_owned(),
    }
}

fn topic(id: &str, name: &str, description: &str) -> Topic {
    Topic {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
    }
}

fn class_level(
    name: &str,
    subjects: Vec<Subject>,
    topics: impl IntoIterator<Item = (&'static str, Vec<Topic>)>,
) -> ClassLevel {
    ClassLevel {
        name: name.to_owned(),
        subjects,
        topics: topics
            .into_iter()
            .map(|(id, list)| (id.to_owned(), list))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn class_10() -> ClassLevel {
    class_level(
        "Class 10",
        vec![
            subject("math", "Mathematics", "Calculator"),
            subject("science", "Science", "FlaskConical"),
            subject("social", "Social Science", "Globe"),
            subject("english", "English", "BookOpen"),
        ],
        [
            (
                "math",
                vec![
                    topic(
                        "real-numbers",
                        "Real Numbers",
                        "Euclid’s division lemma, Fundamental Theorem of Arithmetic.",
                    ),
                    topic(
                        "polynomials",
                        "Polynomials",
                        "Zeros of a polynomial, Relationship between zeros and coefficients.",
                    ),
                    topic(
                        "trigonometry",
                        "Introduction to Trigonometry",
                        "Trigonometric ratios, identities, and heights/distances.",
                    ),
                    topic(
                        "stats",
                        "Statistics",
                        "Mean, median, and mode of grouped data.",
                    ),
                ],
            ),
            (
                "science",
                vec![
                    topic(
                        "chemical-reactions",
                        "Chemical Reactions",
                        "Types of chemical reactions, balancing equations.",
                    ),
                    topic(
                        "electricity",
                        "Electricity",
                        "Ohm’s law, resistance, series and parallel circuits.",
                    ),
                    topic(
                        "life-processes",
                        "Life Processes",
                        "Nutrition, respiration, transportation, and excretion.",
                    ),
                    topic(
                        "light",
                        "Light - Reflection & Refraction",
                        "Spherical mirrors, lenses, and refractive index.",
                    ),
                ],
            ),
            (
                "social",
                vec![
                    topic(
                        "nationalism-india",
                        "Nationalism in India",
                        "The First World War, Khilafat and Non-Cooperation.",
                    ),
                    topic(
                        "resources",
                        "Resources and Development",
                        "Types of resources, land utilization, and soil types.",
                    ),
                    topic(
                        "federalism",
                        "Federalism",
                        "What is federalism, key features, and federalism in India.",
                    ),
                ],
            ),
            (
                "english",
                vec![
                    topic(
                        "letter-god",
                        "A Letter to God",
                        "A story about deep faith in God.",
                    ),
                    topic(
                        "nelson-mandela",
                        "Nelson Mandela: Long Walk to Freedom",
                        "Autobiographical extract about the inauguration ceremony.",
                    ),
                    topic(
                        "grammar",
                        "Grammar & Writing",
                        "Tenses, Modals, Subject-verb concord, Letter writing.",
                    ),
                ],
            ),
        ],
    )
}

fn class_12() -> ClassLevel {
    class_level(
        "Class 12",
        vec![
            subject("physics", "Physics", "Atom"),
            subject("chemistry", "Chemistry", "FlaskRound"),
            subject("math", "Mathematics", "Sigma"),
            subject("cs", "Computer Science", "Cpu"),
        ],
        [
            (
                "physics",
                vec![
                    topic(
                        "electrostatics",
                        "Electrostatics",
                        "Electric charges, fields, potential, and capacitance.",
                    ),
                    topic(
                        "optics",
                        "Ray & Wave Optics",
                        "Reflection, refraction, interference, diffraction.",
                    ),
                    topic(
                        "semiconductors",
                        "Semiconductor Electronics",
                        "Diodes, transistors, logic gates.",
                    ),
                ],
            ),
            (
                "chemistry",
                vec![
                    topic(
                        "solutions",
                        "Solutions",
                        "Types of solutions, Raoult’s law, Colligative properties.",
                    ),
                    topic(
                        "electrochemistry",
                        "Electrochemistry",
                        "Redox reactions, Nernst equation, Conductance.",
                    ),
                    topic(
                        "organic",
                        "Haloalkanes and Haloarenes",
                        "Nomenclature, methods of preparation, physical and chemical properties.",
                    ),
                ],
            ),
            (
                "math",
                vec![
                    topic(
                        "calculus",
                        "Calculus",
                        "Continuity, Differentiability, Integrals, Differential Equations.",
                    ),
                    topic(
                        "vectors",
                        "Vectors & 3D Geometry",
                        "Vector algebra, lines and planes in 3D space.",
                    ),
                    topic(
                        "probability",
                        "Probability",
                        "Conditional probability, Bayes’ theorem.",
                    ),
                ],
            ),
            (
                "cs",
                vec![
                    topic(
                        "python",
                        "Python Revision Tour",
                        "Review of Python basics, loops, and functions.",
                    ),
                    topic(
                        "sql",
                        "Database Management",
                        "SQL commands, joins, and interface with Python.",
                    ),
                    topic(
                        "networks",
                        "Computer Networks",
                        "Network types, devices, protocols, and security.",
                    ),
                ],
            ),
        ],
    )
}

impl Curriculum {
    /// The catalog shipped with the portal: Class 10 and Class 12.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            classes: vec![class_10(), class_12()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_classes() {
        let curriculum = Curriculum::builtin();
        assert_eq!(
            curriculum.classes().collect::<Vec<_>>(),
            vec!["Class 10", "Class 12"]
        );
    }

    #[test]
    fn test_builtin_every_subject_has_topics() {
        let curriculum = Curriculum::builtin();
        for level in &curriculum.classes {
            for subject in &level.subjects {
                let topics = curriculum.topics(&level.name, &subject.id).unwrap();
                assert!(
                    !topics.is_empty(),
                    "{}/{} should have topics",
                    level.name,
                    subject.id
                );
            }
        }
    }

    #[test]
    fn test_builtin_math_differs_by_class() {
        let curriculum = Curriculum::builtin();
        assert!(curriculum.topic("Class 10", "math", "real-numbers").is_ok());
        assert!(curriculum.topic("Class 12", "math", "real-numbers").is_err());
        assert!(curriculum.topic("Class 12", "math", "calculus").is_ok());
    }

    #[test]
    fn test_builtin_subject_ids_unique_per_class() {
        let curriculum = Curriculum::builtin();
        for level in &curriculum.classes {
            let mut ids: Vec<&str> = level.subjects.iter().map(|s| s.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), level.subjects.len());
        }
    }
}
