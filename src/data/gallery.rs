use super::content::{DetailedContent, Keyed};

#[derive(Debug, PartialEq)]
pub struct GalleryItem {
    pub id: &'static str,
    pub category: &'static str,
    /// Cover image, shown on the carousel card.
    pub image: &'static str,
    pub images: &'static [&'static str],
    pub description: &'static str,
    pub detailed_content: Option<DetailedContent>,
}

impl GalleryItem {
    /// Every image of the entry, falling back to the cover when the
    /// entry has no dedicated image list.
    pub fn all_images(&self) -> &[&'static str] {
        if self.images.is_empty() {
            std::slice::from_ref(&self.image)
        } else {
            self.images
        }
    }

    /// Image the detail view selects when it first shows this entry.
    pub fn initial_image(&self) -> &'static str {
        self.all_images()[0]
    }
}

impl Keyed for GalleryItem {
    fn id(&self) -> &'static str {
        self.id
    }
}

pub static GALLERY: [GalleryItem; 7] = [
    GalleryItem {
        id: "rhinoplasty",
        category: "Rhinoplasty",
        image: "/assets/gallery/rhinoplasty/01.jpg",
        images: &[
            "/assets/gallery/rhinoplasty/01.jpg",
            "/assets/gallery/rhinoplasty/02.jpg",
            "/assets/gallery/rhinoplasty/03.jpg",
            "/assets/gallery/rhinoplasty/04.jpg",
            "/assets/gallery/rhinoplasty/05.jpg",
            "/assets/gallery/rhinoplasty/06.jpg",
            "/assets/gallery/rhinoplasty/07.jpg",
            "/assets/gallery/rhinoplasty/08.jpg",
        ],
        description: "Refine and reshape the nose to achieve facial balance and confidence.",
        detailed_content: Some(DetailedContent {
            overview: Some("Rhinoplasty, commonly known as a nose job, is a surgical procedure that reshapes the nose to improve its appearance and/or function. Look your natural best. With his exceptional training and unique artistic vision, Dr. Obayemi is able to perform surgical transformation of the nose to achieve flawless results."),
            benefits: &[
                "Improved facial balance and proportion",
                "Enhanced breathing function",
                "Increased self-confidence",
                "Natural-looking results",
                "Long-lasting outcomes",
            ],
            procedure: Some("The procedure is typically performed under general anesthesia and can take 2-4 hours depending on the complexity. Dr. Obayemi uses advanced techniques to reshape the nasal bones and cartilage, creating a nose that complements your facial features while maintaining or improving breathing function."),
            recovery: Some("Most patients can return to work within 1-2 weeks. Swelling and bruising typically subside within 2-3 weeks, with final results becoming apparent after several months as the nose fully heals."),
            faq: &[],
        }),
    },
    GalleryItem {
        id: "facial-nerve-reanimation",
        category: "Facial Nerve Reanimation",
        image: "/assets/gallery/facial-nerve/01.jpg",
        images: &["/assets/gallery/facial-nerve/01.jpg"],
        description: "Restore facial movement, helping patients regain confidence and natural symmetry.",
        detailed_content: Some(DetailedContent {
            overview: Some("Our faces are the fundamental canvas of expression. After an injury of the facial nerve, Dr. Obayemi is trained to utilize multiple restorative techniques to achieve improvement in facial movement."),
            benefits: &[
                "Restored facial movement and expression",
                "Improved symmetry",
                "Enhanced quality of life",
                "Natural-looking results",
                "Comprehensive rehabilitation support",
            ],
            procedure: Some("The procedure involves nerve grafting, muscle transfer, or other advanced techniques to restore facial function. Dr. Obayemi works closely with physical therapists to ensure optimal recovery and functional outcomes."),
            recovery: Some("Recovery involves a rehabilitation period with physical therapy. The timeline varies based on the specific procedure performed, but most patients see gradual improvement over several months."),
            faq: &[],
        }),
    },
    GalleryItem {
        id: "blepharoplasty",
        category: "Blepharoplasty",
        image: "/assets/gallery/blepharoplasty/01.jpg",
        images: &[
            "/assets/gallery/blepharoplasty/01.jpg",
            "/assets/gallery/blepharoplasty/02.jpg",
        ],
        description: "Eyelid surgery to rejuvenate the eyes by removing excess skin and restoring a youthful appearance.",
        detailed_content: Some(DetailedContent {
            overview: Some("Eyelid surgery, or blepharoplasty, is a procedure to improve the appearance of the eyelids by removing excess skin, fat, and muscle. This procedure can address drooping upper eyelids, puffy bags under the eyes, and other age-related changes around the eyes."),
            benefits: &[
                "More youthful, alert appearance",
                "Improved vision (if excess skin was blocking vision)",
                "Reduced under-eye bags",
                "Smoother eyelid contours",
                "Long-lasting results",
            ],
            procedure: Some("The procedure involves making precise incisions along the natural creases of the eyelids. Excess skin and fat are removed, and the remaining tissue is repositioned for a more youthful appearance. The incisions are carefully placed to minimize visible scarring."),
            recovery: Some("Recovery typically takes 1-2 weeks. Patients may experience some swelling and bruising initially, which subsides within the first week. Most can return to normal activities within 10-14 days."),
            faq: &[],
        }),
    },
    GalleryItem {
        id: "botox-filler",
        category: "Botox & Filler",
        image: "/assets/gallery/botox-filler/01.jpg",
        images: &[
            "/assets/gallery/botox-filler/01.jpg",
            "/assets/gallery/botox-filler/02.jpg",
        ],
        description: "Non-surgical treatments for facial rejuvenation with minimal downtime.",
        detailed_content: Some(DetailedContent {
            overview: Some("Botox and dermal fillers offer effective non-surgical alternatives for facial rejuvenation. Dr. Obayemi provides these treatments to address wrinkles, volume loss, and other signs of aging without surgery."),
            benefits: &[
                "Minimal to no downtime",
                "Natural-looking results",
                "Less invasive than surgery",
                "Quick treatment sessions",
                "Maintenance and prevention options",
            ],
            procedure: Some("Treatments may include Botox for dynamic wrinkles, dermal fillers for volume loss, and other non-invasive procedures. Each treatment plan is customized to address individual concerns and goals."),
            recovery: Some("Most non-surgical treatments have minimal to no downtime, allowing patients to return to normal activities immediately or within a day."),
            faq: &[],
        }),
    },
    GalleryItem {
        id: "cancer-reconstruction",
        category: "Cancer Reconstruction",
        image: "/assets/gallery/cancer-reconstruction/01.jpg",
        images: &[
            "/assets/gallery/cancer-reconstruction/01.jpg",
            "/assets/gallery/cancer-reconstruction/02.jpg",
            "/assets/gallery/cancer-reconstruction/03.jpg",
            "/assets/gallery/cancer-reconstruction/04.jpg",
            "/assets/gallery/cancer-reconstruction/05.jpg",
            "/assets/gallery/cancer-reconstruction/06.jpg",
            "/assets/gallery/cancer-reconstruction/07.jpg",
            "/assets/gallery/cancer-reconstruction/08.jpg",
            "/assets/gallery/cancer-reconstruction/09.jpg",
            "/assets/gallery/cancer-reconstruction/10.jpg",
        ],
        description: "Reconstruct damaged skin and restore confidence with expert skin cancer reconstruction.",
        detailed_content: Some(DetailedContent {
            overview: Some("Dr. Obayemi's training is extensive in the field of maxillofacial trauma and facial reconstruction. As a double-board certified facial plastic and head and neck surgeon, his unique skillset allows him to perform the most complex of facial reconstruction with minimal scarring, so in spite of what may be devastating facial injury, you can leave feeling most like yourself."),
            benefits: &[
                "Restored appearance and function",
                "Minimized visible scarring",
                "Advanced surgical techniques",
                "Improved quality of life",
                "Comprehensive care approach",
            ],
            procedure: Some("The procedure uses advanced reconstructive techniques including local flaps, skin grafts, and microsurgery to achieve optimal results while minimizing visible scarring."),
            recovery: Some("Recovery time varies significantly based on the complexity of the procedure. Dr. Obayemi provides detailed post-operative instructions and closely monitors the healing process."),
            faq: &[],
        }),
    },
    GalleryItem {
        id: "congenital",
        category: "Congenital Procedures",
        image: "/assets/gallery/congenital/01.jpg",
        images: &["/assets/gallery/congenital/01.jpg"],
        description: "Specialized procedures to address congenital conditions and abnormalities.",
        detailed_content: Some(DetailedContent {
            overview: Some("Procedures designed to address congenital facial conditions and abnormalities. Dr. Obayemi provides specialized care for patients with congenital facial differences, working to improve both function and appearance."),
            benefits: &[
                "Improved function and appearance",
                "Enhanced quality of life",
                "Natural-looking results",
                "Comprehensive care",
                "Specialized expertise",
            ],
            procedure: Some("Procedures are customized based on individual needs and conditions. Dr. Obayemi works closely with each patient and their family to develop a treatment plan that addresses specific concerns."),
            recovery: Some("Recovery varies depending on the specific procedure performed. Dr. Obayemi provides comprehensive post-operative care and support throughout the healing process."),
            faq: &[],
        }),
    },
    GalleryItem {
        id: "mission-trips",
        category: "Mission Trips",
        image: "/assets/gallery/mission-trips/01.jpg",
        images: &[
            "/assets/gallery/mission-trips/01.jpg",
            "/assets/gallery/mission-trips/02.jpg",
            "/assets/gallery/mission-trips/03.jpg",
        ],
        description: "Medical missions providing care to underserved communities worldwide.",
        detailed_content: Some(DetailedContent {
            overview: Some("Dr. Obayemi is passionate about volunteer work, serving as a medical director for an annual mission trip to Tanzania where he performed reconstructive procedures for cleft lip, cleft palate, and thyroid disease. He also has performed medical mission work in Ghana, Nigeria, and South Africa throughout his career."),
            benefits: &[
                "Providing care to underserved communities",
                "Global health impact",
                "Training and education",
                "Cultural exchange",
                "Lifesaving procedures",
            ],
            procedure: Some("Mission trips involve traveling to underserved areas to provide surgical care. Dr. Obayemi works with local medical teams to deliver high-quality care to patients in need."),
            recovery: Some("Patients receive post-operative care as part of the mission program, with follow-up care coordinated with local medical providers when possible."),
            faq: &[],
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = GALLERY.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), GALLERY.len());
    }

    #[test]
    fn cover_is_the_first_image() {
        for item in GALLERY.iter() {
            assert_eq!(item.initial_image(), item.image, "{}", item.id);
        }
    }

    #[test]
    fn entry_without_image_list_falls_back_to_cover() {
        let item = GalleryItem {
            id: "solo",
            category: "Solo",
            image: "/assets/solo.jpg",
            images: &[],
            description: "",
            detailed_content: None,
        };
        assert_eq!(item.all_images(), &["/assets/solo.jpg"]);
        assert_eq!(item.initial_image(), "/assets/solo.jpg");
    }
}
