//! Static report copy keyed by domain. Looked up, never computed; the
//! exhaustive matches guarantee every domain has an insight and three tips.

use super::catalog::Intelligence;

/// One-paragraph narrative for a top-ranked domain.
pub const fn insight(domain: Intelligence) -> &'static str {
    match domain {
        Intelligence::Linguistic => {
            "You have a natural gift for language and communication. You think in words \
             and love expressing ideas through speaking and writing."
        }
        Intelligence::LogicalMathematical => {
            "Your mind excels at reasoning, patterns, and systematic thinking. You enjoy \
             solving complex problems and working with abstract concepts."
        }
        Intelligence::Spatial => {
            "You have a strong visual imagination and can easily manipulate mental images. \
             You think in pictures and have a keen sense of space."
        }
        Intelligence::BodilyKinesthetic => {
            "You learn best through physical movement and hands-on experiences. Your body \
             is a powerful tool for expression and learning."
        }
        Intelligence::Musical => {
            "You have a natural sensitivity to rhythm, melody, and sound patterns. Music \
             enhances your learning and emotional expression."
        }
        Intelligence::Interpersonal => {
            "You understand people well and thrive in social interactions. You're \
             empathetic and skilled at working with others."
        }
        Intelligence::Intrapersonal => {
            "You have strong self-awareness and understand your own emotions and \
             motivations deeply. You're reflective and self-directed."
        }
        Intelligence::Naturalist => {
            "You have a keen awareness of nature and living things. You notice patterns \
             in the environment and feel connected to the natural world."
        }
    }
}

/// Three actionable study tips for a top-ranked domain.
pub const fn tips(domain: Intelligence) -> [&'static str; 3] {
    match domain {
        Intelligence::Linguistic => [
            "Take detailed notes and rewrite them in your own words",
            "Explain concepts to others or teach what you've learned",
            "Use storytelling and analogies to remember information",
        ],
        Intelligence::LogicalMathematical => [
            "Create outlines and organize information systematically",
            "Look for patterns and connections between concepts",
            "Practice problem-solving and use logical reasoning exercises",
        ],
        Intelligence::Spatial => [
            "Use mind maps, diagrams, and visual charts to organize information",
            "Color-code your notes and use highlighters strategically",
            "Visualize concepts and create mental images of what you're learning",
        ],
        Intelligence::BodilyKinesthetic => [
            "Study in short, active sessions with movement breaks",
            "Use hands-on activities, models, and experiments",
            "Act out concepts or use gestures while studying",
        ],
        Intelligence::Musical => [
            "Create songs or rhymes to remember information",
            "Study with background music that enhances focus",
            "Use rhythm and beats to memorize sequences",
        ],
        Intelligence::Interpersonal => [
            "Form study groups and discuss concepts with peers",
            "Teach others what you're learning",
            "Participate in group projects and collaborative learning",
        ],
        Intelligence::Intrapersonal => [
            "Set personal learning goals and track your progress",
            "Reflect on what you've learned through journaling",
            "Study independently in quiet spaces where you can focus",
        ],
        Intelligence::Naturalist => [
            "Study outdoors or in natural settings when possible",
            "Organize information by categories and classifications",
            "Connect new concepts to real-world examples from nature",
        ],
    }
}
