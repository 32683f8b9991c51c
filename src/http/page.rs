//! Embedded lookup page.
//!
//! The whole user surface is a single static page: one masked CPF input,
//! a submit button, an error alert and a result panel. It talks to
//! `POST /consulta` and renders whatever comes back. Responses from
//! superseded submissions are discarded via a sequence counter.

/// The lookup page served at `GET /`.
pub const LOOKUP_PAGE: &str = r#"<!doctype html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Consulta Acadêmica</title>
<style>
  body { font-family: system-ui, sans-serif; background: #f5f5f4; margin: 0; }
  .container { max-width: 640px; margin: 0 auto; padding: 3rem 1rem; }
  h1 { text-align: center; margin-bottom: .25rem; }
  .subtitle { text-align: center; color: #666; margin-bottom: 2rem; }
  .card { background: #fff; border: 1px solid #e5e5e5; border-radius: .75rem;
          padding: 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
  .row { display: flex; gap: .5rem; }
  input { flex: 1; padding: .6rem .75rem; font-size: 1rem; border: 1px solid #ccc;
          border-radius: .5rem; }
  button { padding: .6rem 1.25rem; font-size: 1rem; border: 0; border-radius: .5rem;
           background: #1d4ed8; color: #fff; cursor: pointer; }
  button:disabled { opacity: .6; cursor: wait; }
  .alert { background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c;
           border-radius: .5rem; padding: .75rem 1rem; margin-bottom: 1.5rem; display: none; }
  .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
  .field-label { font-size: .8rem; color: #666; }
  .field-value { font-weight: 600; }
  #result { display: none; }
  #empty { text-align: center; color: #666; border-style: dashed; }
</style>
</head>
<body>
<div class="container">
  <h1>Consulta Acadêmica</h1>
  <p class="subtitle">Digite seu CPF para visualizar suas informações</p>

  <div class="card">
    <form id="form">
      <label class="field-label" for="cpf">CPF</label>
      <div class="row">
        <input id="cpf" type="text" placeholder="000.000.000-00" maxlength="14" autocomplete="off">
        <button id="submit" type="submit">Buscar</button>
      </div>
    </form>
  </div>

  <div id="alert" class="alert"></div>

  <div id="result" class="card">
    <h2>Dados do Aluno</h2>
    <div class="grid">
      <div><div class="field-label">Nome</div><div class="field-value" id="f-nome_aluno"></div></div>
      <div><div class="field-label">CPF</div><div class="field-value" id="f-cpf"></div></div>
      <div><div class="field-label">RA</div><div class="field-value" id="f-ra"></div></div>
      <div><div class="field-label">Campus</div><div class="field-value" id="f-campus"></div></div>
      <div><div class="field-label">Disciplina</div><div class="field-value" id="f-nome_disciplina"></div></div>
      <div><div class="field-label">Horário</div><div class="field-value" id="f-horario"></div></div>
      <div><div class="field-label">Local</div><div class="field-value" id="f-local"></div></div>
    </div>
  </div>

  <div id="empty" class="card">Nenhuma busca realizada. Digite um CPF acima para começar.</div>
</div>

<script>
  const input = document.getElementById('cpf');
  const button = document.getElementById('submit');
  const alertBox = document.getElementById('alert');
  const result = document.getElementById('result');
  const empty = document.getElementById('empty');
  const fields = ['cpf', 'campus', 'ra', 'nome_aluno', 'nome_disciplina', 'horario', 'local'];

  // Sequence counter: responses from superseded submissions are dropped.
  let seq = 0;

  function formatCpf(value) {
    const numbers = value.replace(/\D/g, '');
    if (numbers.length <= 11) {
      return numbers
        .replace(/(\d{3})(\d)/, '$1.$2')
        .replace(/(\d{3})(\d)/, '$1.$2')
        .replace(/(\d{3})(\d{1,2})$/, '$1-$2');
    }
    return value;
  }

  input.addEventListener('input', () => { input.value = formatCpf(input.value); });

  function showError(message) {
    alertBox.textContent = message;
    alertBox.style.display = 'block';
  }

  document.getElementById('form').addEventListener('submit', async (event) => {
    event.preventDefault();
    alertBox.style.display = 'none';
    result.style.display = 'none';
    empty.style.display = 'none';

    const digits = input.value.replace(/\D/g, '');
    if (digits.length !== 11) {
      showError('Por favor, digite um CPF válido.');
      return;
    }

    const mySeq = ++seq;
    button.disabled = true;
    button.textContent = 'Buscando...';
    try {
      const response = await fetch('/consulta', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ cpf: digits }),
      });
      const body = await response.json();
      if (mySeq !== seq) return;

      if (!response.ok) {
        showError(body.error || 'Erro ao buscar dados. Tente novamente.');
        return;
      }
      for (const field of fields) {
        document.getElementById('f-' + field).textContent = body[field] || 'Não informado';
      }
      result.style.display = 'block';
    } catch (err) {
      if (mySeq === seq) showError('Erro ao buscar dados. Tente novamente.');
    } finally {
      if (mySeq === seq) {
        button.disabled = false;
        button.textContent = 'Buscar';
      }
    }
  });
</script>
</body>
</html>
"#;
