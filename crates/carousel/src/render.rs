//! HTML fragment for the carousel container.
//!
//! Markup is built with `maud`, which entity-encodes every splice. Image
//! URLs additionally go through [`sanitize_url`] so only allow-listed
//! schemes reach a `src` attribute.

use gazette_core::url_policy::sanitize_url;
use maud::{html, Markup};

use crate::source::Slide;
use crate::state::{CarouselState, CarouselView};

/// Render the inner markup of `.carousel-container` for a snapshot.
pub fn render_carousel(view: &CarouselView) -> String {
    carousel(view).into_string()
}

fn carousel(view: &CarouselView) -> Markup {
    match &view.state {
        CarouselState::Loading => html! {
            div class="carousel-loading" {
                span class="spinner" {}
                p { "Carregando destaques..." }
            }
        },
        CarouselState::Empty => html! {
            div class="carousel-empty" {
                span class="material-icons" { "photo_library" }
                h3 { "Nenhuma notícia em destaque" }
                p { "Adicione notícias em destaque para exibir no carrossel" }
            }
        },
        CarouselState::Error(_) => html! {
            div class="carousel-error" {
                span class="material-icons" { "error" }
                h3 { "Erro ao carregar carrossel" }
                p { "Não foi possível carregar as notícias do carrossel" }
            }
        },
        CarouselState::Displaying { index } => slide_deck(&view.slides, *index),
    }
}

fn slide_deck(slides: &[Slide], active: usize) -> Markup {
    html! {
        div class="carousel-slides" {
            @for (i, slide) in slides.iter().enumerate() {
                (slide_markup(slide, i, i == active))
            }
        }
        div class="carousel-controls" {
            button class="carousel-btn prev" aria-label="Slide anterior" {
                span class="material-icons" { "chevron_left" }
            }
            button class="carousel-btn next" aria-label="Próximo slide" {
                span class="material-icons" { "chevron_right" }
            }
        }
        div class="carousel-dots" {
            @for i in 0..slides.len() {
                button
                    class=(if i == active { "carousel-dot active" } else { "carousel-dot" })
                    data-slide=(i)
                    aria-label=(format!("Ir para o slide {}", i + 1)) {}
            }
        }
    }
}

fn slide_markup(slide: &Slide, index: usize, active: bool) -> Markup {
    let image_url = slide
        .image_url
        .as_deref()
        .filter(|url| !url.trim().is_empty());

    html! {
        div class=(if active { "carousel-slide active" } else { "carousel-slide" }) data-slide=(index) {
            div class="slide-content" {
                div class="slide-category" { (slide.category) }
                h2 class="slide-title" { (slide.title) }
                p class="slide-summary" { (slide.summary.as_deref().unwrap_or_default()) }
                div class="slide-meta" {
                    span { "Por " (slide.author) }
                    span { (slide.created_at.format("%d/%m/%Y").to_string()) }
                    span { (slide.views) " visualizações" }
                }
                a href=(format!("/news/{}", slide.id)) class="slide-cta" { "Ler Matéria" }
            }
            @if let Some(url) = image_url {
                img class="slide-image" src=(sanitize_url(url)) alt=(slide.title) loading="lazy";
            }
        }
    }
}
