use crate::models::StateResponse;

/// Renders the single-page UI. The snapshot is embedded as JSON so the first
/// paint does not wait on a fetch; afterwards the page re-renders from the
/// snapshot returned by every API call.
pub fn render_index(snapshot: &StateResponse) -> String {
    let initial = serde_json::to_string(snapshot).unwrap_or_else(|_| "null".to_string());
    INDEX_HTML.replace("{{INITIAL_STATE}}", &initial)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Advent Calendar</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Nunito:wght@400;600;800&display=swap');

    :root {
      --red: #c0392b;
      --green: #1e8449;
      --gold: #d4ac0d;
      --ice: #2e86c1;
      --ink: #273746;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 18px 44px rgba(36, 62, 99, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(180deg, #eaf4fd 0%, #d6e9f8 100%);
      color: var(--ink);
      font-family: "Nunito", "Trebuchet MS", sans-serif;
      padding: 28px 16px 48px;
    }

    .page {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header {
      text-align: center;
      display: grid;
      gap: 14px;
    }

    h1 {
      margin: 0;
      font-weight: 800;
      font-size: clamp(1.7rem, 4vw, 2.6rem);
      color: var(--red);
    }

    .wallet {
      justify-self: center;
      display: inline-flex;
      align-items: center;
      gap: 8px;
      background: white;
      border-radius: 999px;
      padding: 8px 20px;
      box-shadow: var(--shadow);
      font-size: 1.2rem;
      font-weight: 800;
      color: var(--ice);
    }

    .tabs {
      display: flex;
      justify-content: center;
      gap: 10px;
      flex-wrap: wrap;
    }

    .tab {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 22px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      background: #e5e8ea;
      color: #5d6d7e;
      transition: transform 120ms ease, background 120ms ease;
    }

    .tab:active {
      transform: scale(0.97);
    }

    .tab.active[data-view="calendar"] {
      background: var(--red);
      color: white;
    }

    .tab.active[data-view="shop"] {
      background: var(--green);
      color: white;
    }

    .tab.active[data-view="profile"] {
      background: var(--ice);
      color: white;
    }

    .card {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .card h2 {
      margin: 0 0 16px;
      font-size: 1.3rem;
      color: var(--green);
    }

    .days {
      display: grid;
      grid-template-columns: repeat(5, 1fr);
      gap: 12px;
      margin-bottom: 24px;
    }

    @media (min-width: 640px) {
      .days {
        grid-template-columns: repeat(7, 1fr);
      }
    }

    .day {
      position: relative;
      aspect-ratio: 1;
      border-radius: 14px;
      display: grid;
      place-items: center;
      font-size: 1.15rem;
      font-weight: 800;
      cursor: pointer;
      background: white;
      border: 2px solid var(--red);
      transition: transform 150ms ease;
      user-select: none;
    }

    .day:hover {
      transform: scale(1.06);
    }

    .day.opened {
      background: var(--green);
      border-color: var(--green);
      color: white;
    }

    .day.today {
      box-shadow: 0 0 0 4px var(--gold);
    }

    .day.future {
      opacity: 0.45;
      cursor: not-allowed;
    }

    .day.future:hover {
      transform: none;
    }

    .day.selected {
      box-shadow: 0 0 0 3px var(--ice);
    }

    .day .mark {
      position: absolute;
      top: -8px;
      right: -6px;
      font-size: 0.95rem;
    }

    .task-grid {
      display: grid;
      gap: 14px;
    }

    @media (min-width: 640px) {
      .task-grid {
        grid-template-columns: 1fr 1fr;
      }
    }

    .task {
      border: 2px solid var(--red);
      border-radius: 14px;
      padding: 14px;
      background: white;
      cursor: pointer;
      transition: transform 150ms ease, border-color 150ms ease;
    }

    .task:hover {
      transform: scale(1.02);
      border-color: var(--gold);
    }

    .task.done {
      background: #e9f7ef;
      border-color: #a9dfbf;
    }

    .task .row {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 10px;
      margin-bottom: 6px;
    }

    .task h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    .badge {
      border-radius: 999px;
      padding: 3px 10px;
      font-size: 0.78rem;
      font-weight: 600;
      white-space: nowrap;
    }

    .badge.drawing { background: #fde8ef; color: #c2185b; }
    .badge.craft { background: #e3f0fb; color: #1565c0; }
    .badge.decoration { background: #f0e8fb; color: #6a1b9a; }

    .task p {
      margin: 0 0 10px;
      color: #5d6d7e;
      font-size: 0.92rem;
    }

    .reward {
      color: var(--ice);
      font-weight: 800;
    }

    .shop-grid {
      display: grid;
      gap: 18px;
    }

    @media (min-width: 640px) {
      .shop-grid {
        grid-template-columns: repeat(3, 1fr);
      }
    }

    .gift {
      border: 2px solid var(--gold);
      border-radius: 16px;
      padding: 20px;
      background: white;
      text-align: center;
      transition: transform 150ms ease;
    }

    .gift:hover {
      transform: scale(1.03);
    }

    .gift.owned {
      background: #e9f7ef;
      border-color: #a9dfbf;
      opacity: 0.8;
    }

    .gift .emoji {
      font-size: 3rem;
      margin-bottom: 8px;
    }

    .gift h3 {
      margin: 0 0 6px;
      font-size: 1.05rem;
    }

    .gift button {
      width: 100%;
      border: none;
      border-radius: 999px;
      padding: 10px;
      margin-top: 10px;
      font-family: inherit;
      font-weight: 600;
      font-size: 0.95rem;
      cursor: pointer;
      background: var(--red);
      color: white;
    }

    .gift button:disabled {
      cursor: default;
      background: #cfd4d8;
      color: #7f8c8d;
    }

    .gift.owned button:disabled {
      background: #58d68d;
      color: white;
    }

    .profile-head {
      display: flex;
      align-items: center;
      gap: 16px;
      margin-bottom: 18px;
    }

    .avatar {
      width: 64px;
      height: 64px;
      border-radius: 50%;
      display: grid;
      place-items: center;
      font-size: 2rem;
      background: #eaf4fd;
      border: 2px solid var(--ice);
    }

    .profile-head .who h3 {
      margin: 0;
      font-size: 1.2rem;
    }

    .profile-head .who span {
      color: #5d6d7e;
      font-size: 0.92rem;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
      margin-bottom: 18px;
    }

    .stat {
      background: white;
      border: 1px solid #dde6ec;
      border-radius: 14px;
      padding: 14px;
      text-align: center;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 800;
      color: var(--ice);
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #85929e;
    }

    .achievements {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .achievement {
      background: #fef9e7;
      border: 1px solid var(--gold);
      border-radius: 999px;
      padding: 5px 14px;
      font-size: 0.85rem;
      font-weight: 600;
      color: #9a7d0a;
    }

    .dialog-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(39, 55, 70, 0.5);
      display: none;
      place-items: center;
      padding: 16px;
      z-index: 10;
    }

    .dialog-backdrop.open {
      display: grid;
    }

    .dialog {
      background: white;
      border-radius: 18px;
      padding: 24px;
      width: min(420px, 100%);
      box-shadow: var(--shadow);
    }

    .dialog h3 {
      margin: 0 0 8px;
      font-size: 1.2rem;
    }

    .dialog p {
      margin: 0 0 18px;
      color: #5d6d7e;
    }

    .dialog .foot {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    .dialog button {
      border: none;
      border-radius: 999px;
      padding: 10px 20px;
      font-family: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--green);
      color: white;
    }

    .dialog button:disabled {
      background: #cfd4d8;
      color: #7f8c8d;
      cursor: default;
    }

    .flakes {
      position: fixed;
      inset: 0;
      pointer-events: none;
      overflow: hidden;
    }

    .flake {
      position: absolute;
      font-size: 1.4rem;
      opacity: 0.65;
      animation: drift 4s ease-in-out infinite;
    }

    @keyframes drift {
      0%, 100% { transform: translateY(0); }
      50% { transform: translateY(14px); }
    }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <div class="page">
    <header>
      <h1>🎄 Advent Calendar 🎄</h1>
      <div class="wallet">
        <span>❄️</span>
        <span id="balance">0</span>
        <span>snowflakes</span>
      </div>
      <nav class="tabs">
        <button class="tab" type="button" data-view="calendar">📅 Calendar</button>
        <button class="tab" type="button" data-view="shop">🎁 Gift shop</button>
        <button class="tab" type="button" data-view="profile">👤 Profile</button>
      </nav>
    </header>

    <section id="calendar-view">
      <div id="days" class="days"></div>
      <div class="card">
        <h2>✂️ Creative tasks</h2>
        <div id="tasks" class="task-grid"></div>
      </div>
    </section>

    <section id="shop-view" class="card hidden">
      <h2>🛍️ Holiday gift shop</h2>
      <div id="gifts" class="shop-grid"></div>
    </section>

    <section id="profile-view" class="card hidden">
      <div class="profile-head">
        <div class="avatar">🧑‍🎄</div>
        <div class="who">
          <h3 id="profile-name"></h3>
          <span id="profile-level"></span>
        </div>
      </div>
      <div class="stats">
        <div class="stat"><span class="value" id="stat-earned">0</span><span class="label">Earned total</span></div>
        <div class="stat"><span class="value" id="stat-tasks">0</span><span class="label">Tasks done</span></div>
        <div class="stat"><span class="value" id="stat-gifts">0</span><span class="label">Gifts owned</span></div>
        <div class="stat"><span class="value" id="stat-streak">0</span><span class="label">Day streak</span></div>
      </div>
      <h2>🏅 Achievements</h2>
      <div id="achievements" class="achievements"></div>
    </section>
  </div>

  <div id="dialog-backdrop" class="dialog-backdrop">
    <div class="dialog">
      <h3 id="dialog-title"></h3>
      <p id="dialog-text"></p>
      <div class="foot">
        <span class="reward" id="dialog-reward"></span>
        <button id="dialog-complete" type="button">Complete task</button>
      </div>
    </div>
  </div>

  <div class="flakes" id="flakes"></div>

  <script>
    let state = {{INITIAL_STATE}};
    let dialogOpen = false;

    const categoryBadge = {
      drawing: { label: '🎨 Drawing', cls: 'drawing' },
      craft: { label: '✂️ Craft', cls: 'craft' },
      decoration: { label: '🎀 Decoration', cls: 'decoration' }
    };

    const el = (id) => document.getElementById(id);

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        return;
      }
      state = await res.json();
      render();
    };

    const openDay = (day, isFuture) => {
      if (isFuture) {
        return;
      }
      post('/api/day/open', { day });
    };

    const selectTask = (taskId) => {
      dialogOpen = true;
      post('/api/task/select', { task_id: taskId });
    };

    const completeTask = (taskId) => {
      dialogOpen = false;
      post('/api/task/complete', { task_id: taskId });
    };

    const buyGift = (giftId) => post('/api/gift/buy', { gift_id: giftId });

    const switchView = (view) => post('/api/view', { view });

    const renderDays = () => {
      const grid = el('days');
      grid.innerHTML = '';
      for (let day = 1; day <= 25; day += 1) {
        const opened = state.opened_days.includes(day);
        const isToday = day === state.current_day;
        const isFuture = day > state.current_day;

        const tile = document.createElement('div');
        tile.className = 'day';
        if (opened) tile.classList.add('opened');
        if (isToday) tile.classList.add('today');
        if (isFuture) tile.classList.add('future');
        if (state.selected_day === day) tile.classList.add('selected');
        tile.textContent = day;

        if (opened) {
          const mark = document.createElement('span');
          mark.className = 'mark';
          mark.textContent = '🎁';
          tile.appendChild(mark);
        } else if (isToday) {
          const mark = document.createElement('span');
          mark.className = 'mark';
          mark.textContent = '✨';
          tile.appendChild(mark);
        }

        tile.addEventListener('click', () => openDay(day, isFuture));
        grid.appendChild(tile);
      }
    };

    const renderTasks = () => {
      const list = el('tasks');
      list.innerHTML = '';
      state.tasks.forEach((task) => {
        const badge = categoryBadge[task.category];
        const card = document.createElement('div');
        card.className = task.completed ? 'task done' : 'task';
        card.innerHTML = [
          '<div class="row"><h3></h3><span class="badge ' + badge.cls + '">' + badge.label + '</span></div>',
          '<p></p>',
          '<div class="row"><span class="reward">❄️ +' + task.reward + '</span>' +
            (task.completed ? '<span>✅</span>' : '') + '</div>'
        ].join('');
        card.querySelector('h3').textContent = task.title;
        card.querySelector('p').textContent = task.description;
        card.addEventListener('click', () => selectTask(task.id));
        list.appendChild(card);
      });
    };

    const renderGifts = () => {
      const grid = el('gifts');
      grid.innerHTML = '';
      state.gifts.forEach((gift) => {
        const affordable = state.balance >= gift.price;
        const card = document.createElement('div');
        card.className = gift.purchased ? 'gift owned' : 'gift';
        card.innerHTML = [
          '<div class="emoji">' + gift.emoji + '</div>',
          '<h3></h3>',
          '<div class="reward">❄️ ' + gift.price + '</div>',
          '<button type="button"></button>'
        ].join('');
        card.querySelector('h3').textContent = gift.name;
        const button = card.querySelector('button');
        if (gift.purchased) {
          button.textContent = '✅ Purchased';
          button.disabled = true;
        } else if (affordable) {
          button.textContent = 'Buy';
          button.addEventListener('click', () => buyGift(gift.id));
        } else {
          button.textContent = 'Not enough snowflakes';
          button.disabled = true;
        }
        grid.appendChild(card);
      });
    };

    const renderProfile = () => {
      el('profile-name').textContent = state.profile.name;
      el('profile-level').textContent = 'Level ' + state.profile.level;
      el('stat-earned').textContent = state.profile.total_earned;
      el('stat-tasks').textContent = state.profile.tasks_completed;
      el('stat-gifts').textContent = state.profile.gifts_owned;
      el('stat-streak').textContent = state.profile.streak;

      const shelf = el('achievements');
      shelf.innerHTML = '';
      state.profile.achievements.forEach((label) => {
        const chip = document.createElement('span');
        chip.className = 'achievement';
        chip.textContent = label;
        shelf.appendChild(chip);
      });
    };

    const renderDialog = () => {
      const backdrop = el('dialog-backdrop');
      const task = state.tasks.find((t) => t.id === state.selected_task);
      if (!dialogOpen || !task) {
        backdrop.classList.remove('open');
        return;
      }
      el('dialog-title').textContent = task.title;
      el('dialog-text').textContent = task.description;
      el('dialog-reward').textContent = '❄️ +' + task.reward + ' snowflakes';
      const button = el('dialog-complete');
      button.textContent = task.completed ? 'Done!' : 'Complete task';
      button.disabled = task.completed;
      button.onclick = () => completeTask(task.id);
      backdrop.classList.add('open');
    };

    const render = () => {
      el('balance').textContent = state.balance;

      document.querySelectorAll('.tab').forEach((tab) => {
        tab.classList.toggle('active', tab.dataset.view === state.view);
      });
      el('calendar-view').classList.toggle('hidden', state.view !== 'calendar');
      el('shop-view').classList.toggle('hidden', state.view !== 'shop');
      el('profile-view').classList.toggle('hidden', state.view !== 'profile');

      renderDays();
      renderTasks();
      renderGifts();
      renderProfile();
      renderDialog();
    };

    const scatterFlakes = () => {
      const holder = el('flakes');
      for (let i = 0; i < 8; i += 1) {
        const flake = document.createElement('span');
        flake.className = 'flake';
        flake.textContent = '❄️';
        flake.style.left = Math.random() * 100 + '%';
        flake.style.top = Math.random() * 100 + '%';
        flake.style.animationDelay = Math.random() * 2 + 's';
        flake.style.animationDuration = 3 + Math.random() * 2 + 's';
        holder.appendChild(flake);
      }
    };

    document.querySelectorAll('.tab').forEach((tab) => {
      tab.addEventListener('click', () => switchView(tab.dataset.view));
    });

    el('dialog-backdrop').addEventListener('click', (event) => {
      if (event.target === el('dialog-backdrop')) {
        dialogOpen = false;
        renderDialog();
      }
    });

    const boot = async () => {
      if (!state) {
        const res = await fetch('/api/state');
        state = await res.json();
      }
      render();
    };

    scatterFlakes();
    boot();
  </script>
</body>
</html>
"##;
