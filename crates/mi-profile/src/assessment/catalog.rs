use serde::{Deserialize, Serialize};

/// The eight intelligence domains measured by the questionnaire.
///
/// The set is closed; every lookup table in this crate matches on it
/// exhaustively so a missing entry fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Intelligence {
    Linguistic,
    #[serde(rename = "Logical-Mathematical")]
    LogicalMathematical,
    Spatial,
    #[serde(rename = "Bodily-Kinesthetic")]
    BodilyKinesthetic,
    Musical,
    Interpersonal,
    Intrapersonal,
    Naturalist,
}

impl Intelligence {
    /// All domains in catalog order. Ranking ties resolve to this order.
    pub const ALL: [Intelligence; 8] = [
        Intelligence::Linguistic,
        Intelligence::LogicalMathematical,
        Intelligence::Spatial,
        Intelligence::BodilyKinesthetic,
        Intelligence::Musical,
        Intelligence::Interpersonal,
        Intelligence::Intrapersonal,
        Intelligence::Naturalist,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Intelligence::Linguistic => "Linguistic",
            Intelligence::LogicalMathematical => "Logical-Mathematical",
            Intelligence::Spatial => "Spatial",
            Intelligence::BodilyKinesthetic => "Bodily-Kinesthetic",
            Intelligence::Musical => "Musical",
            Intelligence::Interpersonal => "Interpersonal",
            Intelligence::Intrapersonal => "Intrapersonal",
            Intelligence::Naturalist => "Naturalist",
        }
    }
}

/// A single questionnaire prompt, assigned to exactly one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u16,
    pub domain: Intelligence,
    pub prompt: &'static str,
}

/// One step of the Likert response scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
}

pub const MIN_RESPONSE: u8 = 1;
pub const MAX_RESPONSE: u8 = 4;
pub const QUESTION_COUNT: usize = 43;

pub const LIKERT_SCALE: [LikertOption; 4] = [
    LikertOption {
        value: 1,
        label: "Mostly Disagree",
    },
    LikertOption {
        value: 2,
        label: "Slightly Disagree",
    },
    LikertOption {
        value: 3,
        label: "Slightly Agree",
    },
    LikertOption {
        value: 4,
        label: "Mostly Agree",
    },
];

const fn q(id: u16, domain: Intelligence, prompt: &'static str) -> Question {
    Question { id, domain, prompt }
}

/// Fixed deployment catalog. Ids are contiguous from 1 and the id-to-domain
/// assignment must never change once submissions exist, since stored scores
/// are derived from it.
const CATALOG: [Question; QUESTION_COUNT] = [
    q(
        1,
        Intelligence::Linguistic,
        "I enjoy reading books, magazines, or articles in my free time.",
    ),
    q(
        2,
        Intelligence::Linguistic,
        "I find it easy to express my thoughts and ideas through writing.",
    ),
    q(
        3,
        Intelligence::Linguistic,
        "I like playing with words, puns, and creative writing.",
    ),
    q(
        4,
        Intelligence::Linguistic,
        "I remember information better when I read it rather than hear it.",
    ),
    q(
        5,
        Intelligence::Linguistic,
        "I enjoy telling stories and explaining concepts to others.",
    ),
    q(
        6,
        Intelligence::Linguistic,
        "I have a good vocabulary and enjoy learning new words.",
    ),
    q(
        7,
        Intelligence::LogicalMathematical,
        "I enjoy solving puzzles, riddles, and brain teasers.",
    ),
    q(
        8,
        Intelligence::LogicalMathematical,
        "I like working with numbers and doing calculations.",
    ),
    q(
        9,
        Intelligence::LogicalMathematical,
        "I prefer things to be organized and follow logical patterns.",
    ),
    q(
        10,
        Intelligence::LogicalMathematical,
        "I enjoy science experiments and understanding how things work.",
    ),
    q(
        11,
        Intelligence::LogicalMathematical,
        "I'm good at strategy games like chess or problem-solving activities.",
    ),
    q(
        12,
        Intelligence::LogicalMathematical,
        "I like to categorize and classify information systematically.",
    ),
    q(
        13,
        Intelligence::Spatial,
        "I think in pictures and visualize concepts easily.",
    ),
    q(
        14,
        Intelligence::Spatial,
        "I enjoy drawing, painting, or other visual arts.",
    ),
    q(
        15,
        Intelligence::Spatial,
        "I'm good at reading maps and finding my way in new places.",
    ),
    q(
        16,
        Intelligence::Spatial,
        "I like designing things and working with colors and shapes.",
    ),
    q(
        17,
        Intelligence::Spatial,
        "I enjoy building models or working with 3D objects.",
    ),
    q(
        18,
        Intelligence::BodilyKinesthetic,
        "I prefer hands-on learning and doing things rather than just reading about them.",
    ),
    q(
        19,
        Intelligence::BodilyKinesthetic,
        "I'm good at sports and physical activities.",
    ),
    q(
        20,
        Intelligence::BodilyKinesthetic,
        "I enjoy activities that involve movement and coordination.",
    ),
    q(
        21,
        Intelligence::BodilyKinesthetic,
        "I find it difficult to sit still for long periods.",
    ),
    q(
        22,
        Intelligence::BodilyKinesthetic,
        "I learn better by doing and practicing rather than listening.",
    ),
    q(
        23,
        Intelligence::BodilyKinesthetic,
        "I'm good at using tools and working with my hands.",
    ),
    q(
        24,
        Intelligence::Musical,
        "I can easily remember melodies and songs.",
    ),
    q(
        25,
        Intelligence::Musical,
        "I enjoy listening to music and notice patterns in it.",
    ),
    q(
        26,
        Intelligence::Musical,
        "I like singing, playing instruments, or creating music.",
    ),
    q(
        27,
        Intelligence::Musical,
        "I often tap rhythms or hum tunes unconsciously.",
    ),
    q(
        28,
        Intelligence::Musical,
        "I find it easier to study or work with music in the background.",
    ),
    q(
        29,
        Intelligence::Interpersonal,
        "I enjoy working in groups and collaborating with others.",
    ),
    q(
        30,
        Intelligence::Interpersonal,
        "I'm good at understanding other people's feelings and perspectives.",
    ),
    q(
        31,
        Intelligence::Interpersonal,
        "I like helping others solve their problems.",
    ),
    q(
        32,
        Intelligence::Interpersonal,
        "I'm comfortable meeting new people and making friends.",
    ),
    q(
        33,
        Intelligence::Interpersonal,
        "I prefer team activities over working alone.",
    ),
    q(
        34,
        Intelligence::Interpersonal,
        "I'm good at mediating conflicts and bringing people together.",
    ),
    q(
        35,
        Intelligence::Intrapersonal,
        "I prefer working independently on my own projects.",
    ),
    q(
        36,
        Intelligence::Intrapersonal,
        "I spend time reflecting on my thoughts and feelings.",
    ),
    q(
        37,
        Intelligence::Intrapersonal,
        "I have a clear understanding of my strengths and weaknesses.",
    ),
    q(
        38,
        Intelligence::Intrapersonal,
        "I set personal goals and work towards them consistently.",
    ),
    q(
        39,
        Intelligence::Intrapersonal,
        "I enjoy journaling or keeping track of my personal growth.",
    ),
    q(
        40,
        Intelligence::Naturalist,
        "I enjoy being outdoors and observing nature.",
    ),
    q(
        41,
        Intelligence::Naturalist,
        "I'm interested in animals, plants, and environmental issues.",
    ),
    q(
        42,
        Intelligence::Naturalist,
        "I like categorizing and classifying living things.",
    ),
    q(
        43,
        Intelligence::Naturalist,
        "I notice patterns and changes in the natural environment.",
    ),
];

/// The ordered list of scored questions for this deployment.
pub fn questions() -> &'static [Question] {
    &CATALOG
}

/// Ids of the questions assigned to a domain, in catalog order.
pub fn question_ids(domain: Intelligence) -> impl Iterator<Item = u16> {
    CATALOG
        .iter()
        .filter(move |question| question.domain == domain)
        .map(|question| question.id)
}
