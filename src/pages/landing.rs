use yew::prelude::*;
use web_sys::Event;
use chrono::Datelike;

use crate::components::chart::PerformanceChart;
use crate::content::{BRANCHES, COACHES, LATEST_NEWS};

/// Neutral placeholder swapped in when a remote image fails to load.
const IMAGE_FALLBACK: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='400' height='300'>\
<rect width='100%25' height='100%25' fill='%2327272a'/></svg>";

#[derive(Properties, PartialEq)]
pub struct ContentImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ContentImage)]
fn content_image(props: &ContentImageProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<web_sys::HtmlImageElement>() {
            if img.src() != IMAGE_FALLBACK {
                img.set_src(IMAGE_FALLBACK);
            }
        }
    });

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading="lazy"
            {onerror}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub label: &'static str,
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <span class="section-label">{format!("• {}", props.label)}</span>
            <h2 class="section-title">{props.title}</h2>
            {
                if let Some(subtitle) = props.subtitle {
                    html! { <p class="section-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount.
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

    let year = chrono::Utc::now().year();

    html! {
        <div class="landing-page" id="top">
            <style>{STYLES}</style>

            // Hero
            <header class="hero">
                <div class="hero-backdrop">
                    <ContentImage
                        class="hero-image"
                        src="https://images.unsplash.com/photo-1592656094267-764a45160876?auto=format&fit=crop&q=80&w=1920"
                        alt="Volleyball Motion"
                    />
                    <div class="hero-overlay"></div>
                </div>
                <div class="hero-content">
                    <span class="section-label">{"ALL ABOUT VOLLEYBALL"}</span>
                    <h1 class="hero-title">
                        {"배구에만 "}<span class="gradient-text">{"집중하세요."}</span><br />
                        {"나머지는 AAV가 합니다."}
                    </h1>
                    <p class="hero-subtitle">
                        {"훈련, 분석, 의료, 브랜딩부터 커리어 설계까지."}<br />
                        {"선수 인생의 모든 순간을 함께하는 국내 유일 배구 전문 에이전시."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta">{"상담 신청하기 →"}</button>
                        <div class="hero-avatars">
                            { for (1..=4).map(|i| html! {
                                <ContentImage
                                    key={i}
                                    class="hero-avatar"
                                    src={format!("https://picsum.photos/100/100?random={i}")}
                                    alt="Athlete"
                                />
                            }) }
                            <div class="hero-avatar hero-avatar-more">{"+120"}</div>
                        </div>
                        <span class="hero-trust">{"Trusted by Pro Athletes"}</span>
                    </div>
                </div>
                <div class="scroll-hint">
                    <div class="scroll-hint-dot"></div>
                </div>
            </header>

            <main class="page-main">
                // Training
                <section id="training">
                    <SectionHeader
                        label="01 Training"
                        title="365일 멈추지 않는 성장"
                        subtitle="언제, 어디서든 접근 가능한 최적의 훈련 환경. 수도권 최대 규모의 배구 전용 네트워크를 경험하세요."
                    />
                    <div class="training-grid">
                        <div class="glass-card branch-card">
                            <div class="branch-card-header">
                                <h3>{"📍 전용 체육관 네트워크"}</h3>
                                <p>{format!("수도권 {}개 주요 지점 운영", BRANCHES.len())}</p>
                            </div>
                            <div class="branch-list">
                                { for BRANCHES.iter().map(|branch| html! {
                                    <div key={branch.name} class="branch-row">
                                        <div>
                                            <span class="branch-name">{branch.name}</span>
                                            <span class="branch-category">
                                                {format!("{} · {:.2}, {:.2}", branch.category, branch.lat, branch.lng)}
                                            </span>
                                        </div>
                                        <span class="branch-chevron">{"›"}</span>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="training-side">
                            <div>
                                <h3 class="coaching-title">{"PROFESSIONAL COACHING"}</h3>
                                <div class="coach-list">
                                    { for COACHES.iter().map(|coach| html! {
                                        <div key={coach.id} class="glass-card coach-card">
                                            <ContentImage
                                                class="coach-photo"
                                                src={coach.image_url}
                                                alt={coach.name}
                                            />
                                            <div>
                                                <div class="coach-headline">
                                                    <span class="coach-name">{coach.name}</span>
                                                    <span class="coach-position">{coach.position}</span>
                                                </div>
                                                <p class="coach-team">{coach.team}</p>
                                                <div class="coach-tags">
                                                    { for coach.experience.iter().map(|exp| html! {
                                                        <span key={*exp} class="coach-tag">{format!("#{exp}")}</span>
                                                    }) }
                                                </div>
                                            </div>
                                        </div>
                                    }) }
                                </div>
                            </div>

                            <div class="glass-card success-card">
                                <h3>{"Success Story"}</h3>
                                <PerformanceChart />
                                <p class="success-caption">{"데이터 기반 교정 후 공격 성공률 평균 28% 상승"}</p>
                            </div>
                        </div>
                    </div>
                </section>

                // Analysis
                <section id="analysis">
                    <SectionHeader
                        label="02 Analysis"
                        title="감이 아닌 수치로 증명하는 퍼포먼스"
                        subtitle="대한민국 유일의 3D 모션 분석과 AI 경기 분석 리포트. 당신의 가치는 이제 소수점 단위로 증명됩니다."
                    />
                    <div class="analysis-grid">
                        <div class="glass-card analysis-card">
                            <div>
                                <span class="analysis-icon">{"📈"}</span>
                                <h3>{"AI 경기 분석 리포트"}</h3>
                                <p>{"매 경기 실제 영상을 촬영하고, AI가 공격 분포, 수비 범위, 무브먼트 효율성을 리포트로 제공합니다."}</p>
                            </div>
                            <div class="analysis-sample">
                                <ContentImage
                                    src="https://picsum.photos/600/400?random=20"
                                    alt="Analysis Sample"
                                />
                                <div class="analysis-sample-footer">
                                    <span>{"SAMPLE REPORT v2.1"}</span>
                                    <span class="analysis-sample-link">{"View PDF"}</span>
                                </div>
                            </div>
                        </div>

                        <div class="glass-card analysis-card">
                            <div>
                                <span class="analysis-icon">{"🎯"}</span>
                                <h3>{"SSTC 3D Motion Analysis"}</h3>
                                <p>{"스포츠 사이언스 전문 기관 협업. 3D 모션 캡처를 통한 스파이크 메커니즘 및 점프 밸런스 정밀 분석."}</p>
                            </div>
                            <div class="analysis-capture">
                                <ContentImage
                                    src="https://picsum.photos/600/400?random=21"
                                    alt="3D Capture"
                                />
                                <div class="analysis-capture-overlay">
                                    <div class="scanline"></div>
                                    <span class="calibrating">{"CALIBRATING..."}</span>
                                </div>
                            </div>
                        </div>

                        <div class="glass-card analysis-card analysis-card-light">
                            <div>
                                <span class="analysis-icon">{"🛡️"}</span>
                                <h3>{"전략적 계약 지원"}</h3>
                                <p>{"\"기록은 연봉 협상의 가장 강력한 무기입니다.\" 분석된 데이터를 바탕으로 구단과 유리한 계약을 이끌어냅니다."}</p>
                            </div>
                            <div class="contract-steps">
                                <div class="contract-step">
                                    <span class="step-number">{"1"}</span>
                                    <span>{"데이터 수집 및 강점 분석"}</span>
                                </div>
                                <div class="contract-step">
                                    <span class="step-number">{"2"}</span>
                                    <span>{"비교 우위 리포트 작성"}</span>
                                </div>
                                <div class="contract-step">
                                    <span class="step-number">{"3"}</span>
                                    <span>{"최종 연봉 협상 테이블"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                // Branding
                <section id="branding">
                    <div class="branding-grid">
                        <div>
                            <SectionHeader
                                label="03 Branding"
                                title="코트 안팎에서 빛나는 선수의 가치"
                            />
                            <div class="branding-items">
                                <div class="branding-item">
                                    <div class="branding-icon">{"▶"}</div>
                                    <div>
                                        <h4>{"Owned Media Management"}</h4>
                                        <p>{"선수별 퍼스널 유튜브 및 인스타그램 채널 전문 관리팀 배정. 누적 조회수 5천만 뷰 돌파."}</p>
                                    </div>
                                </div>
                                <div class="branding-item">
                                    <div class="branding-icon">{"◎"}</div>
                                    <div>
                                        <h4>{"Commercial Management"}</h4>
                                        <p>{"스폰서십 및 광고 대행. 선수의 이미지를 훼손하지 않는 프리미엄 브랜드 협업 중심."}</p>
                                    </div>
                                </div>
                            </div>

                            <div class="fee-panel">
                                <div class="fee-panel-header">
                                    <h4>{"투명한 수익 구조"}</h4>
                                    <span class="fee-soon">{"Coming Soon"}</span>
                                </div>
                                <div class="fee-grid">
                                    <div>
                                        <span class="fee-rate">{"5%"}</span>
                                        <span class="fee-label">{"선수 직접 컨택 시"}</span>
                                    </div>
                                    <div>
                                        <span class="fee-rate fee-rate-accent">{"20%"}</span>
                                        <span class="fee-label">{"에이전시 컨택 시"}</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                        <div class="branding-collage">
                            <ContentImage
                                class="collage-tall"
                                src="https://picsum.photos/800/1000?random=30"
                                alt="Branding 1"
                            />
                            <div class="collage-column">
                                <ContentImage
                                    class="collage-wide"
                                    src="https://picsum.photos/800/600?random=31"
                                    alt="Branding 2"
                                />
                                <div class="collage-tile">
                                    <span class="collage-tile-title">{"BOLD"}<br />{"BRAND"}</span>
                                    <p>{"Athlete Identity"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                // Medical
                <section id="medical" class="medical-section">
                    <div class="medical-header">
                        <span class="section-label">{"• 04 Health & Care"}</span>
                        <h2 class="medical-title">{"FIRST: HEALTH"}</h2>
                        <p>{"첫째도 건강, 둘째도 건강입니다. 최고의 퍼포먼스는 완벽한 컨디션에서 나옵니다."}</p>
                    </div>
                    <div class="medical-grid">
                        <div class="glass-card medical-card">
                            <div class="medical-card-header">
                                <div class="medical-badge">{"🩺"}</div>
                                <h3>{"의료 네트워크"}</h3>
                            </div>
                            <div class="medical-profile">
                                <ContentImage
                                    class="medical-photo"
                                    src="https://picsum.photos/200/200?random=40"
                                    alt="Doctor"
                                />
                                <div>
                                    <h4>{"경희의료원 전문의팀"}</h4>
                                    <p>{"족부 명의 및 스포츠 재활 전문가"}</p>
                                    <div class="medical-tags">
                                        <span>{"부상 방지"}</span>
                                        <span>{"정밀 재활"}</span>
                                    </div>
                                </div>
                            </div>
                            <p class="medical-note">
                                {"경희의료원을 포함한 국내 유수 대학병원 네트워크를 통해 부상 시 즉각적인 검진과 수술, 체계적인 재활 프로그램을 지원합니다."}
                            </p>
                        </div>

                        <div class="glass-card medical-card medical-card-light">
                            <div class="medical-card-header">
                                <div class="medical-badge">{"🧠"}</div>
                                <h3>{"스포츠 심리 케어"}</h3>
                            </div>
                            <div class="psych-quote">
                                <h4>{"\"흔들리지 않는 멘탈이 실력입니다\""}</h4>
                                <p>{"슬럼프 극복, 경기 집중력 향상, 은퇴 후 커리어 심리 상담까지."}</p>
                            </div>
                            <div class="psych-advisor">
                                <ContentImage
                                    class="psych-photo"
                                    src="https://picsum.photos/150/150?random=41"
                                    alt="Professor"
                                />
                                <div>
                                    <span class="psych-name">{"김상욱 교수"}</span>
                                    <span class="psych-role">{"AAV 전문 심리 고문"}</span>
                                </div>
                                <span class="psych-arrow">{"→"}</span>
                            </div>
                        </div>
                    </div>
                </section>

                // Administration
                <section id="admin">
                    <div class="admin-intro">
                        <SectionHeader
                            label="05 Administration"
                            title="귀찮고 어려운 일은 전문가에게"
                        />
                        <p class="admin-note">{"선수는 오직 운동과 승리에만 집중할 수 있도록 최고의 전문가 그룹이 서포트합니다."}</p>
                    </div>
                    <div class="admin-grid">
                        <div class="glass-card admin-card">
                            <span class="admin-label">{"Tax Specialist"}</span>
                            <h3>{"세무 자문: 정수진 세무사"}</h3>
                            <ul>
                                <li>{"• 선수 맞춤형 자산 관리 및 포트폴리오"}</li>
                                <li>{"• 종합소득세 신고 및 절세 전략"}</li>
                                <li>{"• 법인 설립 및 사업화 지원"}</li>
                            </ul>
                            <button class="admin-more">{"Learn More +"}</button>
                        </div>
                        <div class="glass-card admin-card">
                            <span class="admin-label">{"Legal Counsel"}</span>
                            <h3>{"법률 자문: 김병직 변호사"}</h3>
                            <ul>
                                <li>{"• 연봉 계약 검토 및 권익 보호"}</li>
                                <li>{"• 계약 위반 대응 및 분쟁 해결"}</li>
                                <li>{"• 퍼스널 브랜딩 관련 상표권 보호"}</li>
                            </ul>
                            <button class="admin-more">{"Learn More +"}</button>
                        </div>
                    </div>
                </section>

                // News
                <section id="news">
                    <SectionHeader label="06 News" title="Latest News" />
                    <div class="news-grid">
                        { for LATEST_NEWS.iter().map(|item| html! {
                            <div key={item.title} class="glass-card news-card">
                                <ContentImage
                                    class="news-image"
                                    src={item.image_url}
                                    alt={item.title}
                                />
                                <div class="news-body">
                                    <div class="news-meta">
                                        <span class="news-category">{item.category}</span>
                                        <span class="news-date">{item.date}</span>
                                    </div>
                                    <h4 class="news-title">{item.title}</h4>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                // FAQ
                <section class="faq-section">
                    <h3>{"Frequently Asked"}</h3>
                    <div class="faq-list">
                        { for (1..=3).map(|i| html! {
                            <div key={i} class="faq-row">
                                <span>{format!("0{i} AAV의 수수료 정책이 궁금합니다.")}</span>
                                <span class="faq-plus">{"+"}</span>
                            </div>
                        }) }
                    </div>
                </section>
            </main>

            // Footer
            <footer class="page-footer">
                <div class="footer-content">
                    <div class="footer-top">
                        <div class="footer-brand">
                            <div class="footer-logo">{"AAV"}</div>
                            <p>{"All About Volleyball."}<br />{"우리는 선수와 함께 꿈을 현실로 만듭니다."}</p>
                            <div class="footer-social">
                                <span class="social-tile">{"IG"}</span>
                                <span class="social-tile">{"YT"}</span>
                            </div>
                        </div>
                        <div class="footer-columns">
                            <div>
                                <h5>{"Explore"}</h5>
                                <ul>
                                    <li>{"Training"}</li>
                                    <li>{"Analysis"}</li>
                                    <li>{"Branding"}</li>
                                </ul>
                            </div>
                            <div>
                                <h5>{"Care"}</h5>
                                <ul>
                                    <li>{"Medical"}</li>
                                    <li>{"Psychology"}</li>
                                    <li>{"Career"}</li>
                                </ul>
                            </div>
                            <div>
                                <h5>{"Contact"}</h5>
                                <ul class="footer-contact">
                                    <li>{"info@aav-agency.co.kr"}</li>
                                    <li>{"+82 2-123-4567"}</li>
                                    <li>{"서울특별시 강남구 테헤란로..."}</li>
                                </ul>
                            </div>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <span>{format!("© {year} AAV AGENCY. ALL RIGHTS RESERVED.")}</span>
                        <div class="footer-legal">
                            <span>{"Privacy Policy"}</span>
                            <span>{"Terms of Service"}</span>
                        </div>
                    </div>
                </div>
            </footer>

            // Floating CTA
            <div class="floating-cta">
                <button>
                    <span class="floating-cta-text">{"상담 신청하기"}</span>
                    <span class="floating-cta-plus">{"+"}</span>
                </button>
            </div>
        </div>
    }
}

const STYLES: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        background: #09090b;
        color: #fafafa;
        font-family: 'Pretendard', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    }
    ::selection { background: #dc2626; color: #fff; }
    .landing-page { min-height: 100vh; }
    .section-label {
        display: block;
        font-size: 0.75rem;
        font-weight: 800;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: #dc2626;
        margin-bottom: 1rem;
    }
    .section-header { margin-bottom: 4rem; }
    .section-title {
        font-size: clamp(2.5rem, 6vw, 4.5rem);
        font-weight: 900;
        letter-spacing: -0.04em;
        line-height: 1.1;
        margin: 0 0 1.5rem;
        max-width: 56rem;
    }
    .section-subtitle {
        font-size: 1.25rem;
        color: #a1a1aa;
        max-width: 42rem;
        line-height: 1.6;
        margin: 0;
    }
    .glass-card {
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid rgba(255, 255, 255, 0.08);
        backdrop-filter: blur(8px);
    }

    /* Hero */
    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        overflow: hidden;
        padding-top: 5rem;
    }
    .hero-backdrop { position: absolute; inset: 0; }
    .hero-image {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.6;
        transform: scale(1.05);
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, #09090b, rgba(9, 9, 11, 0.4), transparent);
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        text-align: center;
    }
    .hero-content .section-label { color: #d4d4d8; margin-bottom: 1.5rem; }
    .hero-title {
        font-size: clamp(3rem, 10vw, 8rem);
        font-weight: 900;
        letter-spacing: -0.03em;
        line-height: 0.95;
        margin: 0 0 2rem;
    }
    .gradient-text {
        background: linear-gradient(90deg, #dc2626, #f87171);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-subtitle {
        font-size: clamp(1.125rem, 2.5vw, 1.5rem);
        color: #a1a1aa;
        max-width: 48rem;
        margin: 0 auto 3rem;
        font-weight: 500;
        line-height: 1.6;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
    }
    .hero-cta {
        background: #dc2626;
        color: #fff;
        padding: 1.25rem 2.5rem;
        border: none;
        border-radius: 9999px;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease;
    }
    .hero-cta:hover { background: #b91c1c; transform: scale(1.05); }
    .hero-avatars { display: flex; }
    .hero-avatars > * { margin-left: -1rem; }
    .hero-avatars > :first-child { margin-left: 0; }
    .hero-avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        border: 2px solid #09090b;
        object-fit: cover;
    }
    .hero-avatar-more {
        background: #27272a;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 0.75rem;
        font-weight: 700;
    }
    .hero-trust {
        font-size: 0.875rem;
        font-weight: 600;
        color: #71717a;
        text-transform: uppercase;
        letter-spacing: 0.2em;
    }
    .scroll-hint {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        width: 1.5rem;
        height: 2.5rem;
        border: 2px solid #fff;
        border-radius: 9999px;
        opacity: 0.4;
        display: flex;
        justify-content: center;
        padding-top: 0.5rem;
        animation: bounce 1.5s infinite;
    }
    .scroll-hint-dot { width: 0.375rem; height: 0.375rem; background: #fff; border-radius: 9999px; }
    @keyframes bounce {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, 0.5rem); }
    }

    /* Main sections */
    .page-main {
        max-width: 80rem;
        margin: 0 auto;
        padding: 8rem 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 12rem;
    }

    /* Training */
    .training-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
    }
    .branch-card { border-radius: 1.5rem; padding: 2rem; }
    .branch-card-header h3 { font-size: 1.5rem; margin: 0 0 0.25rem; }
    .branch-card-header p { color: #a1a1aa; margin: 0 0 2rem; }
    .branch-list { display: flex; flex-direction: column; gap: 1rem; }
    .branch-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem;
        background: rgba(255, 255, 255, 0.05);
        border-radius: 0.75rem;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .branch-row:hover { background: rgba(255, 255, 255, 0.1); }
    .branch-row:hover .branch-name { color: #f87171; }
    .branch-name { display: block; font-weight: 700; transition: color 0.2s ease; }
    .branch-category { font-size: 0.875rem; color: #71717a; }
    .branch-chevron { color: #52525b; font-size: 1.25rem; }
    .training-side { display: flex; flex-direction: column; gap: 3rem; }
    .coaching-title { font-size: 1.875rem; font-weight: 900; font-style: italic; margin: 0 0 2rem; }
    .coach-list { display: flex; flex-direction: column; gap: 1.5rem; }
    .coach-card {
        border-radius: 1rem;
        padding: 1.5rem;
        display: flex;
        gap: 1.5rem;
        align-items: center;
    }
    .coach-photo {
        width: 6rem;
        height: 6rem;
        border-radius: 0.75rem;
        object-fit: cover;
        filter: grayscale(1);
        transition: filter 0.3s ease;
    }
    .coach-card:hover .coach-photo { filter: grayscale(0); }
    .coach-headline { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.25rem; }
    .coach-name { font-size: 1.25rem; font-weight: 700; }
    .coach-position {
        font-size: 0.75rem;
        background: rgba(220, 38, 38, 0.2);
        color: #ef4444;
        padding: 0.125rem 0.5rem;
        border-radius: 0.25rem;
        font-weight: 700;
    }
    .coach-team { font-size: 0.875rem; color: #a1a1aa; margin: 0 0 0.5rem; }
    .coach-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .coach-tag {
        font-size: 0.625rem;
        color: #71717a;
        text-transform: uppercase;
        font-weight: 700;
        letter-spacing: -0.02em;
    }
    .success-card {
        border-radius: 1.5rem;
        padding: 2rem;
        background: rgba(220, 38, 38, 0.05);
        border-color: rgba(127, 29, 29, 0.2);
    }
    .success-card h3 { font-size: 1.5rem; margin: 0 0 1.5rem; }
    .success-caption {
        margin: 1rem 0 0;
        font-size: 0.875rem;
        color: #71717a;
        text-align: center;
        font-style: italic;
    }

    /* Analysis */
    .analysis-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .analysis-card {
        border-radius: 2.5rem;
        padding: 2.5rem;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        transition: border-color 0.2s ease;
    }
    .analysis-card:hover { border-color: rgba(239, 68, 68, 0.5); }
    .analysis-icon { font-size: 3rem; display: block; margin-bottom: 2rem; }
    .analysis-card h3 { font-size: 1.875rem; font-weight: 900; line-height: 1.2; margin: 0 0 1rem; }
    .analysis-card p { color: #a1a1aa; line-height: 1.6; margin: 0; }
    .analysis-card-light { background: #f4f4f5; color: #09090b; }
    .analysis-card-light p { color: #3f3f46; font-weight: 500; }
    .analysis-sample {
        margin-top: 3rem;
        background: rgba(255, 255, 255, 0.05);
        padding: 1rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
    }
    .analysis-sample img { width: 100%; border-radius: 0.5rem; margin-bottom: 1rem; }
    .analysis-sample-footer {
        display: flex;
        justify-content: space-between;
        font-size: 0.75rem;
        font-weight: 700;
        color: #71717a;
    }
    .analysis-sample-link { color: #ef4444; text-decoration: underline; cursor: pointer; }
    .analysis-capture { margin-top: 3rem; position: relative; overflow: hidden; border-radius: 1rem; }
    .analysis-capture img { width: 100%; filter: grayscale(1) brightness(0.5); display: block; }
    .analysis-capture-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .scanline {
        position: absolute;
        top: 50%;
        width: 100%;
        height: 2px;
        background: rgba(220, 38, 38, 0.5);
        animation: pulse 2s infinite;
    }
    @keyframes pulse { 50% { opacity: 0.3; } }
    .calibrating {
        font-family: monospace;
        font-size: 0.625rem;
        color: rgba(255, 255, 255, 0.5);
        background: rgba(0, 0, 0, 0.5);
        padding: 0.25rem 0.5rem;
        z-index: 1;
    }
    .contract-steps { margin-top: 3rem; display: flex; flex-direction: column; gap: 1rem; }
    .contract-step {
        display: flex;
        align-items: center;
        gap: 1rem;
        font-weight: 700;
        padding-bottom: 1rem;
        border-bottom: 1px solid rgba(0, 0, 0, 0.1);
    }
    .contract-step:last-child { border-bottom: none; padding-bottom: 0; }
    .step-number {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #dc2626;
        color: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        flex-shrink: 0;
    }

    /* Branding */
    .branding-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 6rem;
        align-items: center;
    }
    .branding-items { display: flex; flex-direction: column; gap: 3rem; }
    .branding-item { display: flex; gap: 1.5rem; }
    .branding-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.05);
        color: #dc2626;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        flex-shrink: 0;
    }
    .branding-item h4 { font-size: 1.25rem; margin: 0 0 0.5rem; }
    .branding-item p { color: #a1a1aa; margin: 0; line-height: 1.6; }
    .fee-panel {
        margin-top: 4rem;
        padding: 2rem;
        border-radius: 1.5rem;
        background: #18181b;
        border: 1px solid rgba(255, 255, 255, 0.05);
    }
    .fee-panel-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 2rem;
    }
    .fee-panel-header h4 { margin: 0; }
    .fee-soon {
        font-size: 0.75rem;
        color: #71717a;
        text-transform: uppercase;
        font-weight: 900;
    }
    .fee-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
    .fee-rate { display: block; font-size: 2.25rem; font-weight: 900; margin-bottom: 0.5rem; color: #f4f4f5; }
    .fee-rate-accent { color: #dc2626; }
    .fee-label { font-size: 0.875rem; color: #71717a; }
    .branding-collage { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    .collage-tall { border-radius: 1.5rem; width: 100%; height: 37.5rem; object-fit: cover; }
    .collage-column { display: flex; flex-direction: column; gap: 1rem; margin-top: 3rem; }
    .collage-wide { border-radius: 1.5rem; width: 100%; height: 17.5rem; object-fit: cover; }
    .collage-tile {
        background: #dc2626;
        border-radius: 1.5rem;
        padding: 2rem;
        height: 17.5rem;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
    }
    .collage-tile-title {
        font-size: 3rem;
        font-weight: 900;
        font-style: italic;
        line-height: 1;
        margin-bottom: 1rem;
    }
    .collage-tile p {
        font-size: 0.875rem;
        font-weight: 700;
        opacity: 0.8;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        margin: 0;
    }

    /* Medical */
    .medical-section {
        padding: 6rem 0;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    }
    .medical-header { text-align: center; margin-bottom: 6rem; }
    .medical-title {
        font-size: clamp(3rem, 8vw, 6rem);
        font-weight: 900;
        font-style: italic;
        margin: 0 0 2rem;
    }
    .medical-header p { font-size: 1.25rem; color: #a1a1aa; max-width: 42rem; margin: 0 auto; }
    .medical-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
    .medical-card { border-radius: 3rem; padding: 3rem; }
    .medical-card-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 2.5rem; }
    .medical-badge {
        background: #dc2626;
        padding: 0.75rem;
        border-radius: 9999px;
        font-size: 1.5rem;
        line-height: 1;
    }
    .medical-card-header h3 { font-size: 1.875rem; font-weight: 900; letter-spacing: -0.025em; margin: 0; }
    .medical-profile { display: flex; gap: 2rem; align-items: center; margin-bottom: 3rem; }
    .medical-photo {
        width: 8rem;
        height: 8rem;
        border-radius: 9999px;
        object-fit: cover;
        filter: grayscale(1);
    }
    .medical-profile h4 { font-size: 1.5rem; margin: 0 0 0.25rem; }
    .medical-profile p { color: #a1a1aa; margin: 0 0 1rem; }
    .medical-tags { display: flex; gap: 0.5rem; }
    .medical-tags span {
        padding: 0.25rem 0.75rem;
        background: rgba(255, 255, 255, 0.05);
        border-radius: 9999px;
        font-size: 0.75rem;
        font-weight: 700;
        color: #71717a;
    }
    .medical-note { color: #71717a; font-size: 0.875rem; line-height: 1.6; margin: 0; }
    .medical-card-light { background: #fff; color: #09090b; }
    .medical-card-light h3 { font-style: italic; }
    .psych-quote { margin-bottom: 3rem; }
    .psych-quote h4 { font-size: 2.25rem; font-weight: 900; margin: 0 0 1rem; }
    .psych-quote p { color: #52525b; font-weight: 500; margin: 0; }
    .psych-advisor {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        padding: 1.5rem;
        border: 1px solid #e4e4e7;
        border-radius: 1.5rem;
        background: #fafafa;
    }
    .psych-photo { width: 5rem; height: 5rem; border-radius: 1rem; object-fit: cover; }
    .psych-name { display: block; font-weight: 900; font-size: 1.25rem; color: #dc2626; }
    .psych-role { font-size: 0.875rem; font-weight: 700; color: #71717a; }
    .psych-arrow { margin-left: auto; color: #d4d4d8; font-size: 1.5rem; }

    /* Admin */
    .admin-intro {
        display: flex;
        justify-content: space-between;
        align-items: flex-end;
        gap: 2rem;
        margin-bottom: 4rem;
    }
    .admin-intro .section-header { margin-bottom: 0; }
    .admin-note { color: #a1a1aa; max-width: 24rem; margin: 0; }
    .admin-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
    .admin-card { border-radius: 1.5rem; padding: 2.5rem; position: relative; overflow: hidden; }
    .admin-label {
        color: #ef4444;
        font-weight: 900;
        display: block;
        margin-bottom: 1rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        font-size: 0.75rem;
        font-style: italic;
    }
    .admin-card h3 {
        font-size: 1.875rem;
        font-style: italic;
        text-decoration: underline;
        text-underline-offset: 8px;
        text-decoration-color: #dc2626;
        margin: 0 0 1.5rem;
    }
    .admin-card ul {
        list-style: none;
        padding: 0;
        margin: 0 0 2.5rem;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        color: #a1a1aa;
    }
    .admin-more {
        background: none;
        border: none;
        color: #fff;
        font-weight: 700;
        cursor: pointer;
        padding: 0;
        font-size: 1rem;
        transition: color 0.2s ease;
    }
    .admin-more:hover { color: #ef4444; }

    /* News */
    .news-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .news-card { border-radius: 1.5rem; overflow: hidden; cursor: pointer; }
    .news-image {
        width: 100%;
        height: 14rem;
        object-fit: cover;
        display: block;
        filter: grayscale(0.5);
        transition: filter 0.3s ease;
    }
    .news-card:hover .news-image { filter: grayscale(0); }
    .news-body { padding: 1.5rem; }
    .news-meta {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 0.75rem;
    }
    .news-category {
        font-size: 0.75rem;
        font-weight: 700;
        color: #ef4444;
        background: rgba(220, 38, 38, 0.15);
        padding: 0.125rem 0.625rem;
        border-radius: 9999px;
    }
    .news-date { font-size: 0.75rem; color: #71717a; font-weight: 600; }
    .news-title { font-size: 1.25rem; font-weight: 700; margin: 0; line-height: 1.4; }

    /* FAQ */
    .faq-section {
        padding-top: 6rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        max-width: 56rem;
        margin: 0 auto;
        width: 100%;
    }
    .faq-section h3 { font-size: 3rem; font-weight: 900; text-align: center; margin: 0 0 4rem; }
    .faq-list { display: flex; flex-direction: column; gap: 1.5rem; }
    .faq-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 2rem;
        background: #18181b;
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 1rem;
        cursor: pointer;
        font-size: 1.25rem;
        font-weight: 700;
        transition: background 0.2s ease;
    }
    .faq-row:hover { background: #27272a; }
    .faq-plus { color: #71717a; }

    /* Footer */
    .page-footer {
        background: #18181b;
        padding: 6rem 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .footer-content { max-width: 80rem; margin: 0 auto; }
    .footer-top {
        display: flex;
        justify-content: space-between;
        gap: 4rem;
        margin-bottom: 6rem;
        flex-wrap: wrap;
    }
    .footer-brand { max-width: 28rem; }
    .footer-logo {
        display: inline-block;
        background: #dc2626;
        color: #fff;
        font-weight: 900;
        font-size: 2.25rem;
        font-style: italic;
        letter-spacing: -0.05em;
        padding: 0.25rem 0.75rem;
        margin-bottom: 2rem;
    }
    .footer-brand p { font-size: 1.5rem; font-weight: 700; margin: 0 0 2rem; }
    .footer-social { display: flex; gap: 1rem; }
    .social-tile {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        font-size: 0.875rem;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .social-tile:hover { background: #dc2626; }
    .footer-columns {
        display: grid;
        grid-template-columns: repeat(3, minmax(8rem, 1fr));
        gap: 3rem;
    }
    .footer-columns h5 {
        font-size: 0.75rem;
        color: #71717a;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        margin: 0 0 1.5rem;
    }
    .footer-columns ul {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        font-weight: 700;
    }
    .footer-contact { color: #a1a1aa; font-weight: 500; }
    .footer-bottom {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding-top: 3rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        font-size: 0.75rem;
        color: #71717a;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        flex-wrap: wrap;
        gap: 1.5rem;
    }
    .footer-legal { display: flex; gap: 2rem; }
    .footer-legal span { cursor: pointer; transition: color 0.2s ease; }
    .footer-legal span:hover { color: #fff; }

    /* Floating CTA */
    .floating-cta { position: fixed; bottom: 2.5rem; right: 2.5rem; z-index: 60; }
    .floating-cta button {
        background: #fff;
        color: #000;
        border: none;
        height: 5rem;
        padding: 0 2rem;
        border-radius: 9999px;
        box-shadow: 0 25px 50px rgba(220, 38, 38, 0.2);
        display: flex;
        align-items: center;
        gap: 0.75rem;
        font-weight: 900;
        font-size: 1.125rem;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .floating-cta button:hover {
        background: #dc2626;
        color: #fff;
        transform: translateY(-0.25rem);
    }
    .floating-cta-plus {
        width: 2.5rem;
        height: 2.5rem;
        background: #000;
        color: #fff;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    @media (max-width: 1024px) {
        .training-grid, .branding-grid { grid-template-columns: 1fr; }
        .analysis-grid { grid-template-columns: 1fr; }
    }
    @media (max-width: 768px) {
        .page-main { gap: 8rem; padding: 6rem 1.5rem; }
        .medical-grid, .admin-grid, .news-grid { grid-template-columns: 1fr; }
        .admin-intro { flex-direction: column; align-items: flex-start; }
        .floating-cta-text { display: none; }
        .floating-cta button { width: 4rem; height: 4rem; padding: 0; justify-content: center; }
    }
"#;
