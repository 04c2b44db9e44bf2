#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PrettyOpts {
    pub indent_by: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PrettyState {
    pub indent_stack: Vec<usize>,
    pub lines: Vec<String>,
    pub cur_line: String,
}

pub struct PrettyEnv<'a, 'b, S> {
    pub opts: &'a PrettyOpts,
    pub state: PrettyState,
    pub user_state: &'b mut S,
}

impl PrettyState {
    pub fn new() -> Self {
        Self {
            indent_stack: vec![0],
            lines: vec![],
            cur_line: String::new(),
        }
    }
}

impl Default for PrettyState {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, 'b, S> PrettyEnv<'a, 'b, S> {
    pub fn new(opts: &'a PrettyOpts, user_state: &'b mut S) -> Self {
        Self {
            opts,
            user_state,
            state: PrettyState::new(),
        }
    }
    pub fn str(&mut self, s: impl AsRef<str>) {
        let mut lines = s.as_ref().split('\n');
        if let Some(l) = lines.next() {
            self.state.cur_line += l;
        }
        for l in lines {
            self.nl();
            self.state.cur_line += l;
        }
    }
    pub fn pp<P: Pretty<S> + ?Sized>(&mut self, x: &P) {
        x.pp(self);
    }
    pub fn nl(&mut self) {
        let s = std::mem::take(&mut self.state.cur_line);
        self.state.lines.push(s);
        let indent = self.state.indent_stack.last().copied().unwrap_or(0);
        self.state.cur_line.extend(std::iter::repeat(' ').take(indent));
    }
    /// Runs `k` with the indentation increased by [`PrettyOpts::indent_by`].
    /// Lines started inside `k` are indented; the closing line is not.
    pub fn block(&mut self, k: impl FnOnce(&mut Self)) {
        let i = self.state.indent_stack.last().copied().unwrap_or(0);
        self.state.indent_stack.push(i + self.opts.indent_by);
        k(self);
        self.state.indent_stack.pop();
    }
}

pub trait Pretty<S> {
    fn pp(&self, p: &mut PrettyEnv<S>);
}

pub fn pretty<S: Default>(opts: &PrettyOpts, p: impl Pretty<S>) -> String {
    pretty_st(opts, &mut S::default(), p)
}

pub fn pretty_def<S: Default>(p: impl Pretty<S>) -> String {
    let p_opts = PrettyOpts { indent_by: 0 };
    pretty(&p_opts, p)
}

pub fn pretty_st<S>(opts: &PrettyOpts, state: &mut S, p: impl Pretty<S>) -> String {
    pretty_env(&mut PrettyEnv::new(opts, state), p)
}

pub fn pretty_env<S>(env: &mut PrettyEnv<S>, p: impl Pretty<S>) -> String {
    env.pp(&p);
    let mut s = String::new();
    for l in &env.state.lines {
        s += l;
        s += "\n";
    }
    s += &env.state.cur_line;
    s
}

impl<'a, S, P: Pretty<S> + ?Sized> Pretty<S> for &'a P {
    fn pp(&self, p: &mut PrettyEnv<S>) {
        (**self).pp(p)
    }
}

impl<S> Pretty<S> for str {
    fn pp(&self, p: &mut PrettyEnv<S>) {
        p.str(self)
    }
}

impl<S> Pretty<S> for String {
    fn pp(&self, p: &mut PrettyEnv<S>) {
        p.str(self)
    }
}
