use yew::prelude::*;

use super::legal::{LegalContact, LegalPage};
use crate::config;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <section>
                <h2>{"Introduction"}</h2>
                <p>
                    {format!("{} (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. This Privacy \
                      Policy explains how we collect, use, disclose, and safeguard your information when you visit \
                      our website and use our services.", config::LEGAL_NAME)}
                </p>
            </section>

            <section>
                <h2>{"Information We Collect"}</h2>
                <p>{"We may collect information about you in various ways. The information we may collect includes:"}</p>
                <ul>
                    <li>
                        <strong>{"Personal Information: "}</strong>
                        {"Name, email address, phone number, mailing address, and other contact information you \
                          provide when scheduling a consultation or contacting us."}
                    </li>
                    <li>
                        <strong>{"Health Information: "}</strong>
                        {"Medical history, treatment preferences, and other health-related information you provide \
                          during consultations or through our contact forms."}
                    </li>
                    <li>
                        <strong>{"Technical Information: "}</strong>
                        {"IP address, browser type, device information, and usage data collected automatically when \
                          you visit our website."}
                    </li>
                </ul>
            </section>

            <section>
                <h2>{"How We Use Your Information"}</h2>
                <p>{"We use the information we collect to:"}</p>
                <ul>
                    <li>{"Schedule and manage consultations and appointments"}</li>
                    <li>{"Provide medical services and treatment"}</li>
                    <li>{"Respond to your inquiries and communicate with you"}</li>
                    <li>{"Send you appointment reminders and important updates"}</li>
                    <li>{"Improve our website and services"}</li>
                    <li>{"Comply with legal and regulatory requirements"}</li>
                </ul>
            </section>

            <section>
                <h2>{"Information Sharing and Disclosure"}</h2>
                <p>
                    {"We do not sell, trade, or rent your personal information to third parties. We may share your \
                      information only in the following circumstances:"}
                </p>
                <ul>
                    <li>{"With your explicit consent"}</li>
                    <li>{"To comply with legal obligations or court orders"}</li>
                    <li>{"To protect our rights, property, or safety"}</li>
                    <li>{"With service providers who assist in our operations (under strict confidentiality agreements)"}</li>
                    <li>{"In connection with a business transfer or merger"}</li>
                </ul>
            </section>

            <section>
                <h2>{"HIPAA Compliance"}</h2>
                <p>
                    {"As a healthcare provider, we are subject to the Health Insurance Portability and Accountability \
                      Act (HIPAA). Your protected health information (PHI) is handled in accordance with HIPAA \
                      regulations. Please see our separate HIPAA Notice for detailed information about how we protect \
                      your health information."}
                </p>
            </section>

            <section>
                <h2>{"Data Security"}</h2>
                <p>
                    {"We implement appropriate technical and organizational measures to protect your personal \
                      information against unauthorized access, alteration, disclosure, or destruction. However, no \
                      method of transmission over the internet or electronic storage is 100% secure, and we cannot \
                      guarantee absolute security."}
                </p>
            </section>

            <section>
                <h2>{"Your Rights"}</h2>
                <p>{"You have the right to:"}</p>
                <ul>
                    <li>{"Access and receive a copy of your personal information"}</li>
                    <li>{"Request correction of inaccurate or incomplete information"}</li>
                    <li>{"Request deletion of your personal information (subject to legal and medical record retention requirements)"}</li>
                    <li>{"Object to or restrict processing of your information"}</li>
                    <li>{"Withdraw consent where processing is based on consent"}</li>
                </ul>
            </section>

            <section>
                <h2>{"Cookies and Tracking Technologies"}</h2>
                <p>
                    {"Our website may use cookies and similar tracking technologies to enhance your experience. You \
                      can set your browser to refuse cookies or alert you when cookies are being sent."}
                </p>
            </section>

            <section>
                <h2>{"Third-Party Links"}</h2>
                <p>
                    {"Our website may contain links to third-party websites. We are not responsible for the privacy \
                      practices of these external sites. We encourage you to review the privacy policies of any \
                      third-party sites you visit."}
                </p>
            </section>

            <section>
                <h2>{"Children's Privacy"}</h2>
                <p>
                    {"Our services are not directed to individuals under the age of 18. We do not knowingly collect \
                      personal information from children. If you believe we have collected information from a child, \
                      please contact us immediately."}
                </p>
            </section>

            <section>
                <h2>{"Changes to This Privacy Policy"}</h2>
                <p>
                    {"We may update this Privacy Policy from time to time. We will notify you of any material changes \
                      by posting the new policy on this page and updating the \"Last updated\" date. We encourage you \
                      to review this policy periodically."}
                </p>
            </section>

            <section>
                <h2>{"Contact Us"}</h2>
                <p>
                    {"If you have questions or concerns about this Privacy Policy or our privacy practices, please \
                      contact us:"}
                </p>
                <LegalContact />
            </section>
        </LegalPage>
    }
}
