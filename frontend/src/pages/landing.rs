use log::error;
use yew::prelude::*;

use crate::components::modal::{Modal, ModalAction, ModalState};
use crate::utils::reveal::RevealObserver;
use crate::utils::smooth_scroll::anchor_click;

const PROBLEMS: [(&str, &str); 3] = [
    ("Заявки теряются", "Клиенты пишут в мессенджеры ночью и в выходные, а отвечать некому."),
    ("Рутина съедает день", "Менеджеры часами отвечают на одни и те же вопросы вместо продаж."),
    ("Нет прозрачности", "Непонятно, сколько обращений пришло и сколько из них стали сделками."),
];

const SERVICES: [(&str, &str, &str); 3] = [
    ("🤖", "Telegram-боты", "Приём заявок, запись и ответы на частые вопросы круглосуточно."),
    ("🧠", "AI-ассистенты", "Модели, обученные на ваших данных, консультируют клиентов как опытный менеджер."),
    ("🔗", "Интеграции", "Связываем бота с CRM, таблицами и платёжными системами."),
];

const BENEFITS: [(&str, &str); 4] = [
    ("24/7", "Бот отвечает без выходных и больничных."),
    ("−60%", "Меньше ручной работы у менеджеров."),
    ("5 дней", "От заявки до запуска первой версии."),
    ("0 ₽", "Консультация и оценка проекта бесплатно."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal = use_reducer(ModalState::default);

    // Cards fade in as they enter the viewport.
    use_effect_with_deps(
        move |_| {
            let observer = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|document| match RevealObserver::attach(&document) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        error!("Failed to set up reveal animation: {:?}", e);
                        None
                    }
                });
            move || drop(observer)
        },
        (),
    );

    let on_action = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |action: ModalAction| dispatcher.dispatch(action))
    };

    let open_modal = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ModalAction::Open))
    };

    let on_anchor = anchor_click();

    html! {
        <>
            <nav class="top-nav">
                <div class="nav-content">
                    <a href="#hero" class="nav-logo" onclick={on_anchor.clone()}>{"PyBot AI"}</a>
                    <div class="nav-links">
                        <a href="#problems" class="nav-link" onclick={on_anchor.clone()}>{"Проблемы"}</a>
                        <a href="#services" class="nav-link" onclick={on_anchor.clone()}>{"Услуги"}</a>
                        <a href="#benefits" class="nav-link" onclick={on_anchor.clone()}>{"Преимущества"}</a>
                        <a href="#contact" class="nav-link" onclick={on_anchor.clone()}>{"Контакты"}</a>
                    </div>
                </div>
            </nav>

            <header id="hero" class="hero">
                <h1>{"Чат-боты и AI-автоматизация для вашего бизнеса"}</h1>
                <p class="hero-subtitle">
                    {"Отвечаем клиентам, собираем заявки и разгружаем менеджеров, пока вы занимаетесь развитием."}
                </p>
                <button class="cta-button" onclick={open_modal.clone()}>{"Получить консультацию"}</button>
            </header>

            <section id="problems" class="problems">
                <h2>{"Знакомо?"}</h2>
                <div class="problems-grid">
                    { for PROBLEMS.iter().map(|(title, text)| html! {
                        <div class="problem-item">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"Что мы делаем"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(icon, title, text)| html! {
                        <div class="service-card">
                            <div class="service-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="benefits" class="benefits">
                <h2>{"Почему PyBot AI"}</h2>
                <div class="benefits-grid">
                    { for BENEFITS.iter().map(|(figure, text)| html! {
                        <div class="benefit-item">
                            <div class="benefit-figure">{*figure}</div>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact" class="cta-section">
                <h2>{"Готовы автоматизировать рутину?"}</h2>
                <p>{"Оставьте заявку, и мы предложим решение под вашу задачу."}</p>
                <button class="cta-button" onclick={open_modal}>{"Оставить заявку"}</button>
            </section>

            <footer class="footer">
                <p>{"© PyBot AI"}</p>
                <a href="#hero" class="footer-link" onclick={on_anchor}>{"Наверх"}</a>
            </footer>

            <Modal state={(*modal).clone()} {on_action} />
        </>
    }
}
