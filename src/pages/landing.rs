use yew::prelude::*;

use crate::components::accordion::Accordion;
use crate::components::carousel::Carousel;
use crate::components::counter::Counter;
use crate::components::marquee::Marquee;
use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{self, CourseModule, ProcessStep, Testimonial};

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testimonial-slot">
            <div class="testimonial-card">
                <div class="testimonial-header">
                    <div class="testimonial-avatar">
                        <img src={testimonial.avatar} alt={testimonial.name} loading="lazy" />
                    </div>
                    <div>
                        <h4>{ testimonial.name }</h4>
                        <div class="testimonial-stars">
                            { for (0..5).map(|_| html! { <span>{"★"}</span> }) }
                        </div>
                    </div>
                </div>
                <h5 class="testimonial-headline">{ format!("\"{}\"", testimonial.headline) }</h5>
                <p class="testimonial-content">{ testimonial.content }</p>
            </div>
        </div>
    }
}

fn process_step_card(step: &ProcessStep) -> Html {
    html! {
        <div class="process-step">
            <div class="step-number">{ step.number }</div>
            <div class="step-card">
                <span class="step-highlight">{ step.highlight }</span>
                <h3>{ step.title }</h3>
                <p>{ step.description }</p>
            </div>
        </div>
    }
}

fn module_card(module: &CourseModule) -> Html {
    html! {
        <div class="module-card">
            <img src={module.image} alt={module.title} loading="lazy" />
            <div class="module-caption">
                <p class="module-tag">{"Aprenda agora"}</p>
                <h4>{ module.title }</h4>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="sales-page">

            <header class="hero">
                <div class="hero-background">
                    <img src="https://i.imgur.com/PJ03zm8.jpeg" alt="Background decorativo" />
                    <div class="hero-overlay"></div>
                </div>
                <div class="hero-content">
                    <div class="hero-logo">{"[ SUA LOGO AQUI ]"}</div>
                    <h1 class="hero-title">
                        {"Transforme a sua [DOR PRINCIPAL] em um "}
                        <span class="hero-highlight">{"[RESULTADO]"}</span>
                        {" de alto impacto"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Descubra o método passo a passo para dominar o [ASSUNTO DO CURSO] e conquiste os resultados que você sempre buscou de forma acelerada."}
                    </p>
                    <a href="#oferta" class="cta-button hero-cta">
                        {"Quero Garantir Minha Vaga!"}
                    </a>
                </div>
            </header>

            <section class="stats-bar">
                <div class="stats-grid">
                    <Counter target={1500} label="Alunos Satisfeitos" />
                    <Counter target={120} label="Aulas Práticas" prefix="" />
                    <Counter target={12} label="Meses de Suporte" prefix="" />
                </div>
            </section>

            <section class="testimonials">
                <h2>{"Histórias de Transformação"}</h2>
                <Marquee>
                    { for content::TESTIMONIALS.iter().map(testimonial_card) }
                </Marquee>
            </section>

            <section class="comparison">
                <div class="section-header">
                    <h2>{"Veja a diferença na prática"}</h2>
                    <p>{"Compare como é a sua vida hoje e como ela se transformará após dominar a nossa metodologia."}</p>
                </div>
                <div class="comparison-grid">
                    <div class="vs-badge">{"VS"}</div>
                    <div class="comparison-panel without">
                        <h3>{"📉 Sem o Método"}</h3>
                        <ul>
                            { for content::WITHOUT_METHOD.iter().map(|item| html! {
                                <li><span class="item-icon">{"✕"}</span>{ item }</li>
                            }) }
                        </ul>
                    </div>
                    <div class="comparison-panel with">
                        <h3>{"📈 Com o Método"}</h3>
                        <ul>
                            { for content::WITH_METHOD.iter().map(|item| html! {
                                <li><span class="item-icon">{"✓"}</span>{ item }</li>
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="section-cta">
                    <a href="#oferta" class="cta-button">{"ACESSAR O MÉTODO AGORA ↗"}</a>
                </div>
            </section>

            <section class="benefits">
                <div class="section-header">
                    <h2>{"O [NOME DO PRODUTO] é pra você que"}</h2>
                    <p>{"Identifique-se com os pontos abaixo e descubra se este é o seu próximo passo."}</p>
                </div>
                <div class="benefits-grid">
                    { for content::BENEFITS.iter().enumerate().map(|(idx, benefit)| html! {
                        <ScrollReveal delay_ms={(idx as u32) * 150}>
                            <div class="benefit-card">
                                <div class="benefit-icon">{ benefit.icon }</div>
                                <h3>{ benefit.title }</h3>
                                <p>{ benefit.description }</p>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
                <div class="section-cta">
                    <ScrollReveal delay_ms={300}>
                        <a href="#oferta" class="cta-button">{"QUERO GARANTIR MINHA VAGA AGORA!"}</a>
                    </ScrollReveal>
                </div>
            </section>

            <section class="process">
                <div class="process-grid">
                    <div class="process-intro">
                        <div class="process-badge">{"✨ Metodologia Validada"}</div>
                        <h2>{"Nosso "}<span class="accent">{"Processo"}</span>{" Estratégico"}</h2>
                        <p>
                            {"Esqueça o amadorismo. Cada passo do nosso método foi desenhado para gerar "}
                            <b><i>{"escala e previsibilidade"}</i></b>
                            {" no seu negócio."}
                        </p>
                    </div>
                    <div class="process-timeline">
                        <div class="timeline-rail"></div>
                        { for content::PROCESS_STEPS.iter().map(process_step_card) }
                    </div>
                </div>
            </section>

            <section class="course-content">
                <h2>{"O que você vai dominar:"}</h2>
                <Carousel>
                    { for content::COURSE_MODULES.iter().map(module_card) }
                </Carousel>
            </section>

            <section class="mentor">
                <div class="mentor-grid">
                    <div class="mentor-text">
                        <h2>{"Quem sou eu"}</h2>
                        <p>
                            {"Com mais de [X] anos de experiência no mercado de [NICHO], já ajudei mais de [X] pessoas a alcançarem sua independência e dominarem as ferramentas de [ASSUNTO]."}
                            <br /><br />
                            {"Hoje sou referência em "}<b>{"[SUA ESPECIALIDADE]"}</b>
                            {" e desenvolvedor do método "}<b>{"[NOME DO MÉTODO]"}</b>
                            {", focado em resultados reais e duradouros."}
                        </p>
                    </div>
                    <div class="mentor-portrait">
                        <div class="portrait-glow"></div>
                        <img
                            src="https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=1000&auto=format&fit=crop"
                            alt="Foto do Mentor"
                            loading="lazy"
                        />
                    </div>
                </div>
            </section>

            <section id="oferta" class="offer">
                <div class="offer-panel">
                    <div class="offer-topline"></div>
                    <div class="offer-badge">{"⚡ Vagas Limitadas - Oferta de Lançamento"}</div>
                    <h2>{"Invista no seu futuro hoje"}</h2>
                    <div class="offer-old-price">{"De R$ [VALOR ORIGINAL]"}</div>
                    <div class="offer-pricing">
                        <p class="offer-lead">{"POR APENAS"}</p>
                        <div class="offer-price">{"12x de [VALOR]"}</div>
                        <p class="offer-cash">{"Ou R$ [VALOR À VISTA] à vista"}</p>
                    </div>
                    <a href="#" class="cta-button offer-cta">{"Sim! Quero Começar Agora"}</a>
                    <div class="offer-trust">
                        <span>{"🛡️ Compra 100% Segura"}</span>
                        <span>{"✓ Acesso em até 5 min"}</span>
                    </div>
                </div>
            </section>

            <section class="guarantee">
                <div class="guarantee-badge">
                    <div class="guarantee-ring">
                        <div class="guarantee-ring-inner"></div>
                    </div>
                    <div class="guarantee-label">
                        <span class="guarantee-days">{"7"}</span>
                        <span class="guarantee-unit">{"Dias"}</span>
                        <span class="guarantee-risk">{"Risco Zero"}</span>
                    </div>
                </div>
                <div class="guarantee-text">
                    <h2>{"Garantia Incondicional de Satisfação"}</h2>
                    <p>
                        {"Eu retiro todo o risco das suas costas. Experimente todo o conteúdo por 7 dias. Se por QUALQUER motivo você achar que o treinamento não é para você, devolveremos 100% do seu dinheiro."}
                    </p>
                </div>
            </section>

            <section class="faq-section">
                <h2>{"Tire suas dúvidas"}</h2>
                <div class="faq-list">
                    { for content::FAQ_ENTRIES.iter().map(|entry| html! {
                        <Accordion title={entry.question}>
                            <p>{ entry.answer }</p>
                        </Accordion>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <div class="footer-brand">{"[ NOME DA SUA MARCA ]"}</div>
                <div class="footer-legal">
                    <p>{"© 2024 Todos os direitos reservados."}</p>
                    <p>{"CNPJ: 00.000.000/0001-00 | [NOME DA EMPRESA]"}</p>
                </div>
            </footer>

            <style>
                {r#"
                    .sales-page {
                        background: #000;
                        color: #fff;
                        min-height: 100vh;
                        width: 100%;
                        overflow-x: hidden;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }

                    .sales-page section {
                        padding: 4rem 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .sales-page h2 {
                        font-size: 2.5rem;
                        font-weight: 800;
                        text-align: center;
                        margin-bottom: 1rem;
                    }

                    .section-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .section-header p {
                        color: #999;
                        max-width: 42rem;
                        margin: 0 auto;
                        line-height: 1.6;
                    }

                    .cta-button {
                        display: inline-block;
                        padding: 1.25rem 3rem;
                        background: #7c3aed;
                        color: #fff;
                        font-weight: 900;
                        font-size: 1.15rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        text-decoration: none;
                        border-radius: 9999px;
                        box-shadow: 0 0 50px rgba(124, 58, 237, 0.3);
                        transition: all 0.5s ease;
                    }

                    .cta-button:hover {
                        background: #fff;
                        color: #000;
                        box-shadow: 0 0 60px rgba(124, 58, 237, 0.5);
                    }

                    .section-cta {
                        text-align: center;
                        margin-top: 3rem;
                    }

                    /* Hero */

                    .hero {
                        position: relative;
                        min-height: 85vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: #050505;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }

                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: top;
                        opacity: 0.8;
                    }

                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, #000, rgba(0, 0, 0, 0.4), transparent);
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2.5rem;
                        align-items: flex-start;
                        width: 100%;
                    }

                    .hero-logo {
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(8px);
                        padding: 0.5rem 1rem;
                        border-radius: 0.25rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }

                    .hero-title {
                        font-size: 3rem;
                        font-weight: 900;
                        line-height: 1.2;
                        letter-spacing: -0.02em;
                        max-width: 38rem;
                        text-shadow: 0 8px 30px rgba(0, 0, 0, 0.8);
                    }

                    .hero-highlight {
                        background: #7c3aed;
                        padding: 0.25rem 0.75rem;
                        border-radius: 0.375rem;
                        white-space: nowrap;
                    }

                    .hero-subtitle {
                        font-size: 1.5rem;
                        font-weight: 300;
                        color: #e5e5e5;
                        max-width: 36rem;
                        line-height: 1.6;
                        text-shadow: 0 4px 20px rgba(0, 0, 0, 0.6);
                    }

                    /* Stats */

                    .stats-bar {
                        background: #0a0a0a;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        max-width: none !important;
                        padding: 1.5rem 1rem !important;
                    }

                    .stats-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .stat-counter {
                        text-align: center;
                    }

                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 800;
                        color: #fff;
                        margin-bottom: 0.25rem;
                    }

                    .stat-label {
                        color: #999;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.75rem;
                    }

                    /* Testimonial marquee */

                    .testimonials {
                        background: #050505;
                        max-width: none !important;
                        padding-top: 8rem !important;
                    }

                    .testimonials h2 {
                        margin-bottom: 5rem;
                    }

                    .marquee {
                        position: relative;
                        overflow: hidden;
                        padding: 2.5rem 0;
                    }

                    .marquee-track {
                        display: flex;
                        width: fit-content;
                        animation: marquee-scroll 40s linear infinite;
                    }

                    .marquee-track:hover {
                        animation-play-state: paused;
                    }

                    @keyframes marquee-scroll {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }

                    .marquee-fade {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 8rem;
                        z-index: 10;
                        pointer-events: none;
                    }

                    .marquee-fade-left {
                        left: 0;
                        background: linear-gradient(to right, #050505, transparent);
                    }

                    .marquee-fade-right {
                        right: 0;
                        background: linear-gradient(to left, #050505, transparent);
                    }

                    .testimonial-slot {
                        width: 28rem;
                        flex-shrink: 0;
                        padding: 0 1rem;
                    }

                    .testimonial-card {
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 2.5rem;
                        padding: 2.5rem;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        transition: border-color 0.5s ease;
                    }

                    .testimonial-card:hover {
                        border-color: rgba(124, 58, 237, 0.3);
                    }

                    .testimonial-header {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .testimonial-avatar {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        border: 2px solid #7c3aed;
                        overflow: hidden;
                        flex-shrink: 0;
                    }

                    .testimonial-avatar img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .testimonial-stars {
                        color: #eab308;
                        font-size: 0.75rem;
                    }

                    .testimonial-headline {
                        color: #a78bfa;
                        font-weight: 700;
                        font-style: italic;
                        margin-bottom: 1rem;
                    }

                    .testimonial-content {
                        color: #999;
                        line-height: 1.6;
                        flex-grow: 1;
                    }

                    /* Comparison */

                    .comparison-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        position: relative;
                    }

                    .vs-badge {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        transform: translate(-50%, -50%);
                        width: 3.5rem;
                        height: 3.5rem;
                        background: #000;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 900;
                        color: #666;
                        z-index: 10;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }

                    .comparison-panel {
                        border-radius: 2.5rem;
                        padding: 3rem;
                    }

                    .comparison-panel h3 {
                        font-size: 1.75rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }

                    .comparison-panel ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .comparison-panel li {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        line-height: 1.6;
                    }

                    .comparison-panel.without {
                        background: #0a0a0a;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        color: #777;
                    }

                    .comparison-panel.without h3 {
                        color: #999;
                    }

                    .comparison-panel.without .item-icon {
                        color: rgba(239, 68, 68, 0.4);
                    }

                    .comparison-panel.with {
                        background: rgba(255, 255, 255, 0.03);
                        border: 2px solid rgba(124, 58, 237, 0.2);
                        box-shadow: 0 20px 50px rgba(124, 58, 237, 0.1);
                        color: #e5e5e5;
                        font-weight: 500;
                    }

                    .comparison-panel.with .item-icon {
                        color: #7c3aed;
                    }

                    /* Benefits */

                    .benefits-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }

                    .reveal {
                        opacity: 0;
                        transform: translateY(3rem);
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }

                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .benefit-card {
                        background: #0a0a0a;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 2.5rem;
                        padding: 3rem;
                        height: 100%;
                        transition: all 0.5s ease;
                    }

                    .benefit-card:hover {
                        background: rgba(255, 255, 255, 0.05);
                        border-color: rgba(124, 58, 237, 0.3);
                    }

                    .benefit-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .benefit-card h3 {
                        font-size: 1.5rem;
                        font-weight: 900;
                        margin-bottom: 1rem;
                    }

                    .benefit-card:hover h3 {
                        color: #a78bfa;
                    }

                    .benefit-card p {
                        color: #999;
                        font-size: 1.05rem;
                        line-height: 1.7;
                    }

                    /* Process */

                    .process {
                        position: relative;
                        padding-top: 8rem !important;
                        padding-bottom: 8rem !important;
                        background: radial-gradient(circle at center, rgba(124, 58, 237, 0.15) 0%, transparent 60%);
                    }

                    .process-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 6rem;
                        align-items: start;
                    }

                    .process-intro {
                        position: sticky;
                        top: 6rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .process-badge {
                        display: inline-flex;
                        width: fit-content;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(124, 58, 237, 0.1);
                        border: 1px solid rgba(124, 58, 237, 0.2);
                        color: #a78bfa;
                        font-size: 0.8rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }

                    .process-intro h2 {
                        text-align: left;
                        font-size: 3.5rem;
                        font-weight: 900;
                        line-height: 1.05;
                    }

                    .process-intro .accent {
                        color: #7c3aed;
                    }

                    .process-intro p {
                        color: #ccc;
                        font-size: 1.35rem;
                        font-weight: 300;
                        line-height: 1.6;
                        max-width: 32rem;
                    }

                    .process-timeline {
                        position: relative;
                        padding-left: 4rem;
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }

                    .timeline-rail {
                        position: absolute;
                        left: 1.5rem;
                        top: 2rem;
                        bottom: 2rem;
                        width: 3px;
                        background: linear-gradient(to bottom, #7c3aed, #a78bfa, #4c1d95);
                        border-radius: 9999px;
                        opacity: 0.3;
                    }

                    .process-step {
                        position: relative;
                    }

                    .step-number {
                        position: absolute;
                        left: -4rem;
                        top: 0;
                        width: 4rem;
                        height: 4rem;
                        background: #7c3aed;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 900;
                        font-size: 1.5rem;
                        box-shadow: 0 0 30px rgba(124, 58, 237, 0.6);
                        transition: all 0.5s ease;
                        z-index: 20;
                    }

                    .process-step:hover .step-number {
                        background: #fff;
                        color: #7c3aed;
                        transform: scale(1.1);
                    }

                    .step-card {
                        background: #0d0d0d;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 2rem;
                        padding: 2.5rem;
                        margin-left: 1.5rem;
                        transition: all 0.5s ease;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }

                    .process-step:hover .step-card {
                        border-color: rgba(124, 58, 237, 0.5);
                        background: #121212;
                    }

                    .step-highlight {
                        display: inline-block;
                        font-size: 0.65rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #7c3aed;
                        background: rgba(124, 58, 237, 0.1);
                        padding: 0.25rem 0.75rem;
                        border-radius: 0.375rem;
                        margin-bottom: 1rem;
                    }

                    .step-card h3 {
                        font-size: 1.75rem;
                        font-weight: 900;
                        margin-bottom: 1rem;
                    }

                    .step-card p {
                        color: #999;
                        line-height: 1.7;
                    }

                    /* Course content carousel */

                    .carousel {
                        position: relative;
                    }

                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 20;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(124, 58, 237, 0.3);
                        color: #fff;
                        font-size: 1.75rem;
                        line-height: 1;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .carousel-arrow:hover {
                        background: rgba(124, 58, 237, 0.2);
                    }

                    .carousel-arrow-left {
                        left: -1.5rem;
                    }

                    .carousel-arrow-right {
                        right: -1.5rem;
                    }

                    .carousel-arrow-hidden {
                        opacity: 0;
                        pointer-events: none;
                    }

                    .carousel-row {
                        display: flex;
                        gap: 1.5rem;
                        overflow-x: auto;
                        padding-bottom: 1.5rem;
                        scroll-snap-type: x mandatory;
                        scroll-behavior: smooth;
                        scrollbar-width: none;
                        -ms-overflow-style: none;
                    }

                    .carousel-row::-webkit-scrollbar {
                        display: none;
                    }

                    .module-card {
                        min-width: 20rem;
                        scroll-snap-align: center;
                        border-radius: 1rem;
                        overflow: hidden;
                        position: relative;
                        transition: transform 0.3s ease;
                    }

                    .module-card:hover {
                        transform: scale(1.02);
                    }

                    .module-card img {
                        width: 100%;
                        aspect-ratio: 3 / 4;
                        object-fit: cover;
                        opacity: 0.8;
                        transition: opacity 0.3s ease;
                    }

                    .module-card:hover img {
                        opacity: 1;
                    }

                    .module-caption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        padding: 1.5rem;
                        background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.6), transparent);
                    }

                    .module-tag {
                        font-size: 0.7rem;
                        font-weight: 700;
                        color: #a78bfa;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin-bottom: 0.25rem;
                    }

                    .module-caption h4 {
                        font-size: 1.25rem;
                        font-weight: 900;
                    }

                    /* Mentor */

                    .mentor {
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }

                    .mentor-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    .mentor-text h2 {
                        text-align: left;
                        margin-bottom: 1.5rem;
                    }

                    .mentor-text p {
                        color: #ccc;
                        line-height: 1.7;
                        font-size: 1.1rem;
                    }

                    .mentor-portrait {
                        position: relative;
                        max-width: 24rem;
                        margin: 0 auto;
                    }

                    .portrait-glow {
                        position: absolute;
                        inset: -1rem;
                        background: rgba(124, 58, 237, 0.2);
                        filter: blur(48px);
                        border-radius: 50%;
                    }

                    .mentor-portrait img {
                        position: relative;
                        width: 100%;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        filter: grayscale(1);
                        transition: filter 0.7s ease;
                    }

                    .mentor-portrait img:hover {
                        filter: grayscale(0);
                    }

                    /* Offer */

                    .offer {
                        background: #050505;
                        max-width: none !important;
                    }

                    .offer-panel {
                        position: relative;
                        max-width: 42rem;
                        margin: 0 auto;
                        background: rgba(255, 255, 255, 0.03);
                        border: 2px solid rgba(124, 58, 237, 0.4);
                        border-radius: 2.5rem;
                        padding: 2.5rem;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        overflow: hidden;
                    }

                    .offer-topline {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 2px;
                        background: linear-gradient(to right, transparent, #7c3aed, transparent);
                    }

                    .offer-badge {
                        align-self: center;
                        background: rgba(124, 58, 237, 0.1);
                        color: #a78bfa;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }

                    .offer-panel h2 {
                        font-size: 1.25rem;
                        color: #999;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin-bottom: 0;
                    }

                    .offer-old-price {
                        color: #ef4444;
                        font-weight: 700;
                        font-size: 1.5rem;
                        opacity: 0.5;
                        text-decoration: line-through;
                    }

                    .offer-lead {
                        color: #999;
                        font-weight: 500;
                    }

                    .offer-price {
                        font-size: 4rem;
                        font-weight: 900;
                        background: linear-gradient(to right, #a78bfa, #7c3aed);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .offer-cash {
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-transform: uppercase;
                    }

                    .offer-cta {
                        border-radius: 1rem;
                        display: block;
                    }

                    .offer-trust {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        flex-wrap: wrap;
                        opacity: 0.5;
                        font-size: 0.75rem;
                    }

                    /* Guarantee */

                    .guarantee {
                        text-align: center;
                    }

                    .guarantee-badge {
                        position: relative;
                        display: inline-block;
                        margin-bottom: 2rem;
                    }

                    .guarantee-ring {
                        width: 14rem;
                        height: 14rem;
                        border: 8px solid rgba(124, 58, 237, 0.3);
                        border-radius: 50%;
                        animation: spin-slow 15s linear infinite;
                    }

                    .guarantee-ring-inner {
                        width: 100%;
                        height: 100%;
                        border: 4px dashed rgba(124, 58, 237, 0.5);
                        border-radius: 50%;
                    }

                    @keyframes spin-slow {
                        from { transform: rotate(0deg); }
                        to { transform: rotate(360deg); }
                    }

                    .guarantee-label {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }

                    .guarantee-days {
                        font-size: 4rem;
                        font-weight: 900;
                    }

                    .guarantee-unit {
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }

                    .guarantee-risk {
                        font-size: 0.75rem;
                        color: #999;
                    }

                    .guarantee-text {
                        max-width: 48rem;
                        margin: 0 auto;
                    }

                    .guarantee-text p {
                        color: #999;
                        line-height: 1.7;
                    }

                    /* FAQ */

                    .faq-section {
                        background: #050505;
                        max-width: none !important;
                    }

                    .faq-list {
                        max-width: 48rem;
                        margin: 0 auto;
                    }

                    .faq-item {
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                    }

                    .faq-question {
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem 0;
                        background: none;
                        border: none;
                        color: inherit;
                        text-align: left;
                        font-size: 1.15rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }

                    .faq-question:hover {
                        color: #a78bfa;
                    }

                    .toggle-icon {
                        font-size: 1.5rem;
                        flex-shrink: 0;
                        transition: transform 0.3s ease;
                    }

                    .faq-answer {
                        max-height: 0;
                        opacity: 0;
                        overflow: hidden;
                        transition: all 0.3s ease-in-out;
                        color: #999;
                        line-height: 1.7;
                    }

                    .faq-item.open .faq-answer {
                        max-height: 50rem;
                        opacity: 1;
                        padding-bottom: 1.25rem;
                    }

                    /* Footer */

                    .footer {
                        background: #000;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        padding: 3rem 2rem;
                        text-align: center;
                    }

                    .footer-brand {
                        font-size: 1.25rem;
                        font-weight: 900;
                        opacity: 0.3;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin-bottom: 1.5rem;
                    }

                    .footer-legal {
                        color: #666;
                        font-size: 0.8rem;
                        line-height: 1.6;
                    }

                    /* Responsive */

                    @media (max-width: 768px) {
                        .sales-page section {
                            padding: 2.5rem 1rem;
                        }

                        .sales-page h2 {
                            font-size: 1.75rem;
                        }

                        .hero-content {
                            text-align: center;
                            align-items: center;
                        }

                        .hero-title {
                            font-size: 1.6rem;
                        }

                        .hero-subtitle {
                            font-size: 1.15rem;
                        }

                        .hero-cta {
                            width: 100%;
                        }

                        .stats-grid {
                            gap: 0.5rem;
                        }

                        .stat-value {
                            font-size: 1.5rem;
                        }

                        .stat-label {
                            font-size: 0.6rem;
                        }

                        .testimonial-slot {
                            width: 19rem;
                        }

                        .comparison-grid,
                        .benefits-grid,
                        .process-grid,
                        .mentor-grid {
                            grid-template-columns: 1fr;
                        }

                        .vs-badge {
                            display: none;
                        }

                        .process-intro {
                            position: static;
                            text-align: center;
                        }

                        .process-intro h2 {
                            text-align: center;
                            font-size: 2.25rem;
                        }

                        .process-intro p {
                            margin: 0 auto;
                        }

                        .process-badge {
                            margin: 0 auto;
                        }

                        .mentor-text {
                            order: 2;
                            text-align: center;
                        }

                        .mentor-text h2 {
                            text-align: center;
                        }

                        .mentor-portrait {
                            order: 1;
                            max-width: 18rem;
                        }

                        .module-card {
                            min-width: 15rem;
                        }

                        .carousel-arrow-left {
                            left: 0;
                        }

                        .carousel-arrow-right {
                            right: 0;
                        }

                        .offer-price {
                            font-size: 2.5rem;
                        }

                        .guarantee-ring {
                            width: 10rem;
                            height: 10rem;
                        }

                        .guarantee-days {
                            font-size: 2.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
