#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub procedure: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub year: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 8] = [
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        procedure: "Rhinoplasty",
        rating: 5,
        text: "Dr. Obayemi exceeded all my expectations. The results are natural and beautiful. I couldn't be happier with my rhinoplasty.",
        year: "2024",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        procedure: "Facial Rejuvenation",
        rating: 5,
        text: "Professional, caring, and incredibly skilled. The entire experience was wonderful from consultation to recovery.",
        year: "2024",
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        procedure: "Eyelid Surgery",
        rating: 5,
        text: "I feel like a new person! Dr. Obayemi's expertise and attention to detail made all the difference.",
        year: "2024",
    },
    Testimonial {
        id: 4,
        name: "James Thompson",
        procedure: "Reconstructive Surgery",
        rating: 5,
        text: "After my accident, I thought I'd never look normal again. Dr. Obayemi restored not just my appearance but my confidence.",
        year: "2024",
    },
    Testimonial {
        id: 5,
        name: "Lisa Anderson",
        procedure: "Gender Affirmation",
        rating: 5,
        text: "Dr. Obayemi understood exactly what I needed. The results are everything I hoped for and more.",
        year: "2024",
    },
    Testimonial {
        id: 6,
        name: "David Park",
        procedure: "Non-Surgical Treatments",
        rating: 5,
        text: "The non-surgical options were perfect for me. Quick, effective, and no downtime. Highly recommend!",
        year: "2024",
    },
    Testimonial {
        id: 7,
        name: "Rachel Martinez",
        procedure: "Facial Rejuvenation",
        rating: 5,
        text: "Outstanding results! Dr. Obayemi is truly an artist. I look years younger and feel incredible.",
        year: "2024",
    },
    Testimonial {
        id: 8,
        name: "Robert Kim",
        procedure: "Rhinoplasty",
        rating: 5,
        text: "The best decision I've ever made. Dr. Obayemi listened to my concerns and delivered exactly what I wanted.",
        year: "2024",
    },
];

/// The table twice over, so a track translated by exactly half its
/// width loops without a visible seam.
pub fn marquee_track() -> impl Iterator<Item = (usize, &'static Testimonial)> {
    TESTIMONIALS.iter().chain(TESTIMONIALS.iter()).enumerate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_repeats_the_table_once() {
        let track: Vec<_> = marquee_track().collect();
        assert_eq!(track.len(), TESTIMONIALS.len() * 2);
        let half = TESTIMONIALS.len();
        for (i, (_, testimonial)) in track.iter().take(half).enumerate() {
            assert_eq!(testimonial.id, track[i + half].1.id);
        }
    }

    #[test]
    fn ratings_fit_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
