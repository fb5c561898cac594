use super::content::Faq;

pub static FAQS: [Faq; 8] = [
    Faq {
        question: "What is facial plastic surgery?",
        answer: "Facial plastic and reconstructive surgery is a specialized field focused on cosmetic and reconstructive procedures of the face, head, and neck. It includes procedures such as rhinoplasty, facelift, blepharoplasty, congenital facial/cleft surgery, and all reconstructive surgery. Because of the complex anatomy involved, facial plastic and reconstructive surgeons have an in-depth knowledge of both the aesthetic and functional elements of the entire head and neck.",
    },
    Faq {
        question: "How do I know if I'm a good candidate for facial plastic surgery?",
        answer: "The best way to determine if you're a good candidate is through a preliminary consultation with Dr. Obayemi. During this consultation, we'll discuss your goals, medical history, and evaluate the relevant facial aesthetics to determine the best approach for your needs.",
    },
    Faq {
        question: "What is the recovery time for facial procedures?",
        answer: "Recovery time varies depending on the procedure. Minor procedures may require just a few days, while more extensive surgeries may take several weeks. Dr. Obayemi will provide detailed recovery instructions and timelines during your consultation. Because of his vast surgical experience in both facial aesthetics and reconstruction, he is able to personalize your treatment plan to fit your exact needs.",
    },
    Faq {
        question: "Are consultations free?",
        answer: "There is typically a small consultation fee for a preliminary visit with Dr. Obayemi which will be added to your payment for any procedures booked! However we occasionally offer complimentary consultations during peak seasons for both in-person and virtual visits. This allows you to meet Dr. Obayemi, discuss your goals, and learn about your treatment options without any obligation.",
    },
    Faq {
        question: "Do you accept insurance?",
        answer: "Insurance coverage depends on whether the procedure is considered medically necessary (reconstructive) or cosmetic. Reconstructive procedures often have insurance coverage, while cosmetic procedures are typically self-pay. Our team will help you understand your coverage options.",
    },
    Faq {
        question: "How long do results last?",
        answer: "The longevity of results varies by procedure. Some procedures provide permanent results, while others may require maintenance treatments. During your consultation, Dr. Obayemi will explain the expected duration of results for your specific procedure.",
    },
    Faq {
        question: "What makes Dr. Obayemi different from other facial plastic surgeons?",
        answer: "Dr. Obayemi is a dual board-certified facial plastic and reconstructive surgeon and head & neck surgeon, providing a unique combination of expertise. He has extensive experience working with a vast range of patient populations with a variety of needs from traumatic injuries to subtle cosmetic procedures to more extensive rejuvenation. His artistic vision, combined with surgical precision and commitment to patient safety, ensures natural-looking, beautiful results.",
    },
    Faq {
        question: "Can I see before and after photos?",
        answer: "Absolutely! During your consultation, we can show you before and after photos of previous patients (with their consent) to help you understand the types of results possible. We also have a gallery section on our website showcasing our work.",
    },
];
