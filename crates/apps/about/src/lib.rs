//! About panel: static product description, release footer, and credits.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use system_ui::prelude::*;

/// Product summary shown under the panel title.
pub const DESCRIPTION: &str = "Este sistema permite gestionar un conjunto de entidades básicas a \
través de operaciones CRUD (Crear, Leer, Actualizar y Eliminar). Incluye gestión de Ciudades, \
Departamentos, Profesiones y Usuarios, todo integrado en una interfaz de escritorio intuitiva.";

/// Feature bullet list.
pub const FEATURES: [&str; 5] = [
    "Gestión completa de entidades con operaciones CRUD",
    "Interfaz de escritorio intuitiva con ventanas desplegables",
    "Almacenamiento local persistente de datos",
    "Validación de formularios",
    "Sistema de notificaciones para operaciones exitosas y fallidas",
];

/// Technology badges.
pub const TECHNOLOGIES: [&str; 4] = ["Rust", "Leptos", "WebAssembly", "localStorage"];

/// Release label shown in the footer.
pub const VERSION_LABEL: &str = "Versión 1.0.0";

/// Project label shown in the footer.
pub const PROJECT_LABEL: &str = "Proyecto Final - 2025";

/// Credit rows as `(label, value)` pairs.
pub const CREDITS: [(&str, &str); 4] = [
    ("Nombre", "Estudiante"),
    ("Código", "EST12345"),
    ("Asignatura", "Programación"),
    ("Fecha", "Abril 2025"),
];

#[component]
/// About window contents.
pub fn AboutApp() -> impl IntoView {
    view! {
        <Stack layout_class="about-app" padding=LayoutPadding::Md>
            <Card layout_class="about-card">
                <Stack gap=LayoutGap::Sm padding=LayoutPadding::None>
                    <Cluster gap=LayoutGap::Sm align=LayoutAlign::Center>
                        <Icon icon=IconName::Info size=IconSize::Lg />
                        <Heading>"Acerca del Sistema"</Heading>
                    </Cluster>
                    <Text tone=TextTone::Secondary>"Sistema de Gestión CRUD - Proyecto Final"</Text>
                </Stack>

                <Stack gap=LayoutGap::Sm padding=LayoutPadding::None>
                    <Heading role=TextRole::Label>"Descripción"</Heading>
                    <Text>{DESCRIPTION}</Text>
                </Stack>

                <Stack gap=LayoutGap::Sm padding=LayoutPadding::None>
                    <Heading role=TextRole::Label>"Características"</Heading>
                    <ul class="about-features">
                        {FEATURES.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                    </ul>
                </Stack>

                <Stack gap=LayoutGap::Sm padding=LayoutPadding::None>
                    <Heading role=TextRole::Label>"Tecnologías Utilizadas"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        {TECHNOLOGIES
                            .iter()
                            .map(|tech| view! { <Badge tone=TextTone::Accent>{*tech}</Badge> })
                            .collect_view()}
                    </Cluster>
                </Stack>

                <Cluster layout_class="about-footer" justify=LayoutJustify::Between>
                    <Cluster gap=LayoutGap::Sm align=LayoutAlign::Center>
                        <Icon icon=IconName::Code size=IconSize::Sm />
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{VERSION_LABEL}</Text>
                    </Cluster>
                    <Cluster gap=LayoutGap::Sm align=LayoutAlign::Center>
                        <Icon icon=IconName::Heart size=IconSize::Sm />
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{PROJECT_LABEL}</Text>
                    </Cluster>
                </Cluster>
            </Card>

            <Card layout_class="about-credits">
                <Heading>"Desarrollado por"</Heading>
                <Grid gap=LayoutGap::Md>
                    {CREDITS
                        .iter()
                        .map(|(label, value)| {
                            view! {
                                <Stack gap=LayoutGap::None padding=LayoutPadding::None>
                                    <Text role=TextRole::Label tone=TextTone::Secondary>
                                        {format!("{label}:")}
                                    </Text>
                                    <Text>{*value}</Text>
                                </Stack>
                            }
                        })
                        .collect_view()}
                </Grid>
            </Card>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn credits_cover_author_and_course() {
        let labels: Vec<_> = CREDITS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Nombre", "Código", "Asignatura", "Fecha"]);
        assert_eq!(CREDITS[1].1, "EST12345");
    }

    #[test]
    fn footer_names_the_release() {
        assert_eq!(VERSION_LABEL, "Versión 1.0.0");
        assert!(FEATURES.iter().all(|feature| !feature.is_empty()));
    }
}
