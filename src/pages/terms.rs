use yew::prelude::*;

use super::legal::{LegalContact, LegalPage};
use crate::config;

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage title="Terms of Service">
            <section>
                <h2>{"Agreement to Terms"}</h2>
                <p>
                    {format!("By accessing and using the website of {} (\"we,\" \"our,\" or \"us\"), you accept and \
                      agree to be bound by the terms and provision of this agreement. If you do not agree to these \
                      Terms of Service, please do not use our website or services.", config::LEGAL_NAME)}
                </p>
            </section>

            <section>
                <h2>{"Use License"}</h2>
                <p>
                    {"Permission is granted to temporarily download one copy of the materials on our website for \
                      personal, non-commercial transitory viewing only. This is the grant of a license, not a transfer \
                      of title, and under this license you may not:"}
                </p>
                <ul>
                    <li>{"Modify or copy the materials"}</li>
                    <li>{"Use the materials for any commercial purpose or for any public display"}</li>
                    <li>{"Attempt to decompile or reverse engineer any software contained on our website"}</li>
                    <li>{"Remove any copyright or other proprietary notations from the materials"}</li>
                    <li>{"Transfer the materials to another person or \"mirror\" the materials on any other server"}</li>
                </ul>
            </section>

            <section>
                <h2>{"Medical Disclaimer"}</h2>
                <p>
                    {"The content on this website, including text, graphics, images, and other material, is for \
                      informational purposes only and is not intended to be a substitute for professional medical \
                      advice, diagnosis, or treatment. Always seek the advice of your physician or other qualified \
                      health provider with any questions you may have regarding a medical condition. Never disregard \
                      professional medical advice or delay in seeking it because of something you have read on this \
                      website."}
                </p>
                <p>
                    {"The information provided on this website does not create a physician-patient relationship. A \
                      physician-patient relationship is only established through an in-person consultation and \
                      examination."}
                </p>
            </section>

            <section>
                <h2>{"Consultation and Services"}</h2>
                <p>{"Our website provides information about our services and allows you to request consultations. However:"}</p>
                <ul>
                    <li>{"Requesting a consultation through our website does not guarantee an appointment"}</li>
                    <li>{"All consultations are subject to availability and our scheduling policies"}</li>
                    <li>{"We reserve the right to decline services to any individual at our discretion"}</li>
                    <li>{"All medical services are subject to separate agreements and consent forms"}</li>
                </ul>
            </section>

            <section>
                <h2>{"User Accounts and Information"}</h2>
                <p>{"When you provide information through our website, you agree to:"}</p>
                <ul>
                    <li>{"Provide accurate, current, and complete information"}</li>
                    <li>{"Maintain and promptly update your information as necessary"}</li>
                    <li>{"Maintain the security of any passwords or access codes"}</li>
                    <li>{"Accept all responsibility for activities that occur under your account"}</li>
                </ul>
            </section>

            <section>
                <h2>{"Intellectual Property"}</h2>
                <p>
                    {format!("All content on this website, including but not limited to text, graphics, logos, \
                      images, audio clips, digital downloads, and software, is the property of {} or its content \
                      suppliers and is protected by United States and international copyright laws.", config::LEGAL_NAME)}
                </p>
            </section>

            <section>
                <h2>{"Prohibited Uses"}</h2>
                <p>{"You may not use our website:"}</p>
                <ul>
                    <li>{"In any way that violates any applicable federal, state, local, or international law or regulation"}</li>
                    <li>{"To transmit, or procure the sending of, any advertising or promotional material without our prior written consent"}</li>
                    <li>{"To impersonate or attempt to impersonate us, our employees, or another user"}</li>
                    <li>{"In any way that infringes upon the rights of others, or in any way is illegal, threatening, fraudulent, or harmful"}</li>
                    <li>{"To engage in any other conduct that restricts or inhibits anyone's use or enjoyment of the website"}</li>
                </ul>
            </section>

            <section>
                <h2>{"Limitation of Liability"}</h2>
                <p>
                    {format!("In no event shall {}, its directors, officers, employees, or agents be liable for any \
                      indirect, incidental, special, consequential, or punitive damages, including without limitation, \
                      loss of profits, data, use, goodwill, or other intangible losses, resulting from your use of our \
                      website or services.", config::LEGAL_NAME)}
                </p>
            </section>

            <section>
                <h2>{"Indemnification"}</h2>
                <p>
                    {format!("You agree to defend, indemnify, and hold harmless {} and its officers, directors, \
                      employees, and agents from and against any claims, liabilities, damages, judgments, awards, \
                      losses, costs, expenses, or fees (including reasonable attorneys' fees) arising out of or \
                      relating to your violation of these Terms of Service or your use of the website.", config::LEGAL_NAME)}
                </p>
            </section>

            <section>
                <h2>{"Governing Law"}</h2>
                <p>
                    {"These Terms of Service shall be governed by and construed in accordance with the laws of the \
                      State in which our practice is located, without regard to its conflict of law provisions. Any \
                      disputes arising under or in connection with these terms shall be subject to the exclusive \
                      jurisdiction of the courts located in that State."}
                </p>
            </section>

            <section>
                <h2>{"Changes to Terms"}</h2>
                <p>
                    {"We reserve the right, at our sole discretion, to modify or replace these Terms of Service at any \
                      time. If a revision is material, we will try to provide at least 30 days' notice prior to any new \
                      terms taking effect. What constitutes a material change will be determined at our sole discretion."}
                </p>
            </section>

            <section>
                <h2>{"Severability"}</h2>
                <p>
                    {"If any provision of these Terms of Service is held to be invalid or unenforceable by a court, the \
                      remaining provisions of these Terms of Service will remain in effect."}
                </p>
            </section>

            <section>
                <h2>{"Contact Information"}</h2>
                <p>{"If you have any questions about these Terms of Service, please contact us:"}</p>
                <LegalContact />
            </section>
        </LegalPage>
    }
}
