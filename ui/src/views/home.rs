use dioxus::prelude::*;

use crate::components::{use_viewport_watchers, Localized, Reveal};
use crate::contact::ContactSection;

/// Untagged copy stays in Portuguese whatever the active language.
const AREAS: &[(&str, &str)] = &[
    ("Agroprocessamento", "Sumos, polpas, compotas e frutas desidratadas."),
    ("Agricultura sustentável", "Biofertilizantes a partir de resíduos de fruta."),
    ("Consultoria", "Planos de negócio e acesso a mercados para produtores."),
];

const SERVICES: &[&str] = &[
    "Assistência técnica a produtores",
    "Processamento de fruta por encomenda",
    "Formação em boas práticas agrícolas",
    "Estudos de viabilidade",
];

const PRODUCTS: &[(&str, &str)] = &[
    ("sumos", "Sumos naturais"),
    ("polpas", "Polpas de fruta"),
    ("compotas", "Compotas"),
    ("secas", "Frutas secas"),
    ("biofertilizantes", "Biofertilizantes"),
];

const PARTNERS: &[&str] = &["Cooperativas de Nampula", "Associações de produtores", "Parceiros de desenvolvimento"];

const TEAM: &[(&str, &str)] = &[
    ("Direção Geral", "Gestão e parcerias"),
    ("Produção", "Qualidade e processamento"),
    ("Campo", "Extensão agrária"),
];

#[component]
pub fn Home() -> Element {
    use_viewport_watchers();

    rsx! {
        main { class: "page page-home",
            section { id: "home", class: "section hero",
                Reveal { id: "hero",
                    h1 { Localized { slot: "hero-title" } }
                    p { class: "hero__text", Localized { slot: "hero-text" } }
                    a { class: "button button--primary", href: "#sobre",
                        Localized { slot: "hero-button" }
                    }
                }
            }

            section { id: "sobre", class: "section",
                Reveal { id: "about",
                    h2 { Localized { slot: "about-title" } }
                    p { Localized { slot: "about-text-1" } }
                    p { Localized { slot: "about-text-2" } }
                }
            }

            section { id: "areas", class: "section",
                h2 { Localized { slot: "areas-title" } }
                div { class: "cards",
                    for (title, text) in AREAS.iter() {
                        Reveal { key: "{title}", id: *title,
                            article { class: "card",
                                h3 { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }

            section { id: "servicos", class: "section",
                h2 { Localized { slot: "services-title" } }
                Reveal { id: "services",
                    ul { class: "list",
                        for service in SERVICES.iter() {
                            li { key: "{service}", "{service}" }
                        }
                    }
                }
            }

            section { id: "produtos", class: "section",
                h2 { Localized { slot: "products-title" } }
                div { class: "cards",
                    for (id, name) in PRODUCTS.iter() {
                        Reveal { key: "{id}", id: *id,
                            article { class: "card card--product", h3 { "{name}" } }
                        }
                    }
                }
            }

            section { id: "parceiros", class: "section",
                h2 { Localized { slot: "partners-title" } }
                Reveal { id: "partners",
                    ul { class: "list list--inline",
                        for partner in PARTNERS.iter() {
                            li { key: "{partner}", "{partner}" }
                        }
                    }
                }
            }

            section { id: "equipe", class: "section",
                h2 { Localized { slot: "team-title" } }
                div { class: "cards",
                    for (role, focus) in TEAM.iter() {
                        Reveal { key: "{role}", id: *role,
                            article { class: "card",
                                h3 { "{role}" }
                                p { "{focus}" }
                            }
                        }
                    }
                }
            }

            ContactSection {}
        }
    }
}
