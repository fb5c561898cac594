use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::config;
use crate::hooks::count_up::use_count_up;
use crate::hooks::in_view::use_in_view;
use crate::routing::scroll_spy::Section;

struct Program {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const PROGRAMS: [Program; 4] = [
    Program {
        icon: Icon::GraduationCap,
        title: "Scholarship Programs",
        description: "Supporting aspiring plastic surgeons through financial aid and educational resources",
    },
    Program {
        icon: Icon::Users,
        title: "Mentorship Network",
        description: "Connecting students, trainees, and professionals with experienced mentors",
    },
    Program {
        icon: Icon::Globe,
        title: "Global Surgical Missions",
        description: "Providing reconstructive surgery to patients with facial injuries worldwide",
    },
    Program {
        icon: Icon::Heart,
        title: "Community Support",
        description: "Creating a supportive environment for healthcare professionals to thrive",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: 500,
        label: "Patients Served",
        suffix: "+",
    },
    Stat {
        value: 50,
        label: "Trainees Mentored",
        suffix: "+",
    },
    Stat {
        value: 15,
        label: "Countries Reached",
        suffix: "+",
    },
    Stat {
        value: 100,
        label: "Scholarships Awarded",
        suffix: "+",
    },
];

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: Stat,
    start: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let count = use_count_up(props.stat.value, config::COUNT_UP_MS, props.start);

    html! {
        <div class="stat">
            <div class="stat-value">{format!("{}{}", count, props.stat.suffix)}</div>
            <div class="stat-label">{props.stat.label}</div>
        </div>
    }
}

#[function_component(Foundation)]
pub fn foundation() -> Html {
    let mission = use_node_ref();
    let mission_in_view = use_in_view(mission.clone(), "-100px");
    let stats = use_node_ref();
    let stats_in_view = use_in_view(stats.clone(), "-50px");

    html! {
        <section id={Section::Foundation.anchor()} class="foundation section-dark">
            <style>
                {r#"
                .foundation-grid {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .foundation-mission h3 {
                    color: #ffffff;
                    font-size: 1.75rem;
                    margin-bottom: 1.25rem;
                }
                .foundation-mission > p {
                    color: rgba(255, 255, 255, 0.75);
                    line-height: 1.8;
                    margin-bottom: 2rem;
                }
                .program {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .program .icon {
                    flex-shrink: 0;
                    width: 48px;
                    height: 48px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 8px;
                    background: rgba(212, 175, 55, 0.15);
                }
                .program h4 {
                    color: #d4af37;
                    margin-bottom: 0.25rem;
                }
                .program p {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.95rem;
                }
                .impact-panel {
                    background: linear-gradient(135deg, #1a2942 0%, #0a1628 100%);
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    border-radius: 12px;
                    padding: 2.5rem;
                }
                .impact-panel h4 {
                    color: #ffffff;
                    font-size: 1.5rem;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .impact-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .stat {
                    text-align: center;
                }
                .stat-value {
                    font-size: 2.75rem;
                    font-weight: 700;
                    color: #d4af37;
                    font-variant-numeric: tabular-nums;
                }
                .stat-label {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.9rem;
                }
                @media (max-width: 900px) {
                    .foundation-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header">
                    <span class="section-eyebrow">{"Global Impact"}</span>
                    <h2 class="section-title">{"AO Facial Plastics Foundation"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lede">
                        {"Empowering the next generation of surgeons and bringing world-class care to \
                          underserved communities worldwide."}
                    </p>
                </div>

                <div class="foundation-grid">
                    <div ref={mission} class={classes!("foundation-mission", "reveal", mission_in_view.then_some("revealed"))}>
                        <h3>{"Our Foundation Mission"}</h3>
                        <p>
                            {"The AO Facial Plastics Foundation is dedicated to creating lasting change in the \
                              field of facial plastic surgery through education, mentorship, and global \
                              outreach. We believe in empowering historically disenfranchised surgical trainees \
                              and providing access to quality care for patients worldwide."}
                        </p>
                        { for PROGRAMS.iter().map(|program| html! {
                            <div class="program">
                                <IconGlyph icon={program.icon} />
                                <div>
                                    <h4>{program.title}</h4>
                                    <p>{program.description}</p>
                                </div>
                            </div>
                        }) }
                        <button class="btn-gold">{"Learn More About Our Foundation"}</button>
                    </div>

                    <div ref={stats} class="impact-panel">
                        <h4>{"Our Impact"}</h4>
                        <div class="impact-stats">
                            { for STATS.iter().map(|stat| html! {
                                <StatCounter key={stat.label} stat={*stat} start={stats_in_view} />
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::count_up::CountUp;

    #[test]
    fn every_stat_lands_on_its_value() {
        for stat in STATS {
            let counter = CountUp::new(stat.value, config::COUNT_UP_MS);
            let end = counter.progress(config::COUNT_UP_MS as f64);
            assert_eq!(counter.value_at(end), stat.value, "{}", stat.label);
        }
    }

    #[test]
    fn stats_carry_a_plus_suffix() {
        assert!(STATS.iter().all(|stat| stat.suffix == "+"));
        let values: Vec<_> = STATS.iter().map(|stat| stat.value).collect();
        assert_eq!(values, vec![500, 50, 15, 100]);
    }
}
