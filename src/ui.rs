use crate::dashboard::{DashboardView, LoadState, progress_percent};
use crate::models::{DashboardSnapshot, Intensity};
use crate::onboarding::OnboardingForm;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

pub fn render_onboarding(form: &OnboardingForm) -> String {
    let draft = &form.draft;
    let error = form
        .error()
        .map(|message| format!(r#"<p class="error" role="alert">{}</p>"#, text(message)))
        .unwrap_or_default();
    let disabled = if form.can_submit() { "" } else { " disabled" };

    ONBOARDING_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{NAME}}", &attr(&draft.name))
        .replace("{{QUIT_DATE}}", &attr(&draft.quit_date))
        .replace("{{DAILY}}", &attr(&draft.daily_cig_before))
        .replace("{{PRICE}}", &attr(&draft.price_per_pack))
        .replace("{{PER_PACK}}", &attr(&draft.cigs_per_pack))
        .replace("{{CURRENCY}}", &attr(&draft.currency))
        .replace("{{ERROR}}", &error)
        .replace("{{DISABLED}}", disabled)
}

pub fn render_dashboard(view: &DashboardView, alert: Option<&str>) -> String {
    let content = match &view.load {
        LoadState::Loading => r#"<p class="muted">Carregando...</p>"#.to_string(),
        LoadState::Error(message) => format!(
            r#"<p class="error" role="alert">{}</p><a class="link" href="/">Tentar novamente</a>"#,
            text(message)
        ),
        LoadState::Ready(snapshot) => render_snapshot(snapshot, view),
    };

    DASHBOARD_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{ALERT}}", &alert.map(alert_script).unwrap_or_default())
        .replace("{{CONTENT}}", &content)
}

fn render_snapshot(snapshot: &DashboardSnapshot, view: &DashboardView) -> String {
    let stats = &snapshot.stats;
    let currency = &snapshot.user.currency;
    let progress = progress_percent(stats.progress);

    let cards = [
        ("Dias desde que parou", stats.days_since_quit.to_string()),
        ("Sequência atual", stats.current_streak.to_string()),
        ("Dias sem fumar", stats.smoke_free_days.to_string()),
        ("Economia", money(currency, stats.savings.amount)),
        ("Gasto diário evitado", money(currency, stats.expected_daily_spend)),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            r#"<div class="stat"><span class="label">{label}</span><span class="value">{}</span></div>"#,
            text(value)
        )
    })
    .collect::<String>();

    let badges = if snapshot.badges.is_empty() {
        r#"<p class="muted">Nenhuma conquista ainda.</p>"#.to_string()
    } else {
        let items = snapshot
            .badges
            .iter()
            .map(|badge| {
                let icon = badge
                    .icon
                    .as_deref()
                    .map(|icon| format!(r#"<span class="icon">{}</span>"#, text(icon)))
                    .unwrap_or_default();
                format!(
                    r#"<li class="badge">{icon}<strong>{}</strong><span>{}</span></li>"#,
                    text(&badge.name),
                    text(&badge.description)
                )
            })
            .collect::<String>();
        format!(r#"<ul class="badges">{items}</ul>"#)
    };

    let intensities = Intensity::all()
        .map(|level| {
            let checked = if level == view.craving.intensity { " checked" } else { "" };
            let value = level.get();
            format!(
                r#"<label class="pill"><input type="radio" name="intensity" value="{value}"{checked} /><span>{value}</span></label>"#
            )
        })
        .collect::<String>();

    format!(
        r#"<header>
      <h1>Olá, {name}</h1>
      <p class="subtitle">Cada dia conta.</p>
    </header>
    <section class="panel">{cards}</section>
    <section class="progress-card">
      <div class="progress-label"><span>Progresso</span><span>{progress:.0}%</span></div>
      <div class="progress"><div class="bar" style="width: {progress}%"></div></div>
    </section>
    <section class="forms">
      <form method="post" action="/checkin" class="card">
        <h2>Check-in de hoje</h2>
        <label>Cigarros fumados hoje
          <input type="number" name="cigarettes_count" min="0" step="1" value="{count}" />
        </label>
        <button type="submit" class="btn-primary">Registrar check-in</button>
      </form>
      <form method="post" action="/craving" class="card">
        <h2>Vontade de fumar</h2>
        <fieldset class="intensity"><legend>Intensidade</legend>{intensities}</fieldset>
        <label>Gatilho
          <input type="text" name="trigger" value="{trigger}" />
        </label>
        <label>Nota
          <textarea name="note" rows="2">{note}</textarea>
        </label>
        <button type="submit" class="btn-secondary">Registrar vontade</button>
      </form>
    </section>
    <section>
      <h2>Conquistas</h2>
      {badges}
    </section>"#,
        name = text(&snapshot.user.name),
        count = view.pending_count,
        trigger = attr(&view.craving.trigger),
        note = text(&view.craving.note),
    )
}

fn money(currency: &str, amount: f64) -> String {
    format!("{currency} {amount:.2}")
}

fn alert_script(message: &str) -> String {
    let literal = serde_json::to_string(message)
        .unwrap_or_default()
        .replace('<', "\\u003c");
    format!("<script>window.alert({literal});</script>")
}

const STYLE: &str = r#"
    :root {
      --bg-1: #eef6f0;
      --bg-2: #bfe3c9;
      --ink: #23302a;
      --accent: #2f8f5b;
      --accent-2: #2f4858;
      --danger: #c0392b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1e8 60%, #f4f9f5 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle, .muted {
      margin: 0;
      color: #5f6b64;
    }

    .error {
      margin: 0;
      color: var(--danger);
      font-weight: 600;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    .stat, .card, .progress-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7d8a83;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .progress {
      height: 14px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress .bar {
      height: 100%;
      background: var(--accent);
    }

    .progress-label {
      display: flex;
      justify-content: space-between;
      font-weight: 600;
    }

    .forms {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.95rem;
    }

    input[type="text"], input[type="number"], input[type="date"], textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    fieldset.intensity {
      border: none;
      padding: 0;
      margin: 0;
      display: flex;
      gap: 8px;
    }

    .pill {
      display: inline-flex;
      align-items: center;
      gap: 4px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .btn-primary {
      background: var(--accent);
    }

    .btn-secondary {
      background: var(--accent-2);
    }

    .btn-reset {
      background: transparent;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.3);
    }

    .badges {
      list-style: none;
      padding: 0;
      margin: 0;
      display: grid;
      gap: 10px;
    }

    .badge {
      display: grid;
      grid-template-columns: auto 1fr;
      column-gap: 10px;
    }

    .badge .icon {
      grid-row: span 2;
      font-size: 1.6rem;
    }

    .link {
      color: var(--accent-2);
    }
"#;

const ONBOARDING_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Livre do Cigarro</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Vamos começar</h1>
      <p class="subtitle">Conte um pouco sobre seu plano para parar de fumar.</p>
    </header>
    <form id="plan" method="post" action="/onboarding" class="card">
      <label>Nome
        <input type="text" name="name" value="{{NAME}}" required />
      </label>
      <label>Data em que parou
        <input type="date" name="quit_date" value="{{QUIT_DATE}}" required />
      </label>
      <label>Cigarros por dia antes
        <input type="number" name="daily_cig_before" min="0" step="1" value="{{DAILY}}" />
      </label>
      <label>Preço do maço
        <input type="number" name="price_per_pack" min="0" step="0.01" value="{{PRICE}}" />
      </label>
      <label>Cigarros por maço
        <input type="number" name="cigs_per_pack" min="1" step="1" value="{{PER_PACK}}" />
      </label>
      <label>Moeda
        <input type="text" name="currency" maxlength="5" value="{{CURRENCY}}" />
      </label>
      {{ERROR}}
      <button id="submit" type="submit" class="btn-primary"{{DISABLED}}>Criar meu plano</button>
    </form>
  </main>
  <script>
    const form = document.getElementById('plan');
    const submit = document.getElementById('submit');
    const number = (name) => {
      const raw = form.elements[name].value.trim();
      return raw === '' ? 0 : Number(raw);
    };
    const valid = () =>
      form.elements.name.value.trim() !== '' &&
      form.elements.quit_date.value !== '' &&
      Number.isInteger(number('daily_cig_before')) &&
      number('daily_cig_before') >= 0 &&
      number('price_per_pack') >= 0 &&
      Number.isInteger(number('cigs_per_pack')) &&
      number('cigs_per_pack') > 0;
    form.addEventListener('input', () => {
      submit.disabled = !valid();
    });
    form.addEventListener('submit', () => {
      submit.disabled = true;
    });
  </script>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Livre do Cigarro</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    {{CONTENT}}
    <form method="post" action="/reset">
      <button type="submit" class="btn-reset">Recomeçar</button>
    </form>
  </main>
  {{ALERT}}
</body>
</html>
"#;
