//! Session store and the authentication boundary.
//!
//! The session is an explicit object: callers construct it with an
//! injected storage document and auth backend, read the persisted state
//! once at init, and every mutation re-persists. There is no module-level
//! global.
//!
//! Authentication goes through the [`AuthBackend`] trait. The shipped
//! implementation is [`MockAuthBackend`], which never rejects credentials;
//! a real backend can be substituted without touching any caller.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::error::{AuthError, CoreError, ValidationError};
use crate::events::Event;
use crate::storage::Document;

/// Role a user holds within their team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Leader,
    Member,
}

/// A participant profile. Required vs. optional fields are declared up
/// front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub college: Option<String>,
    pub avatar: String,
    pub role: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub team_role: Option<TeamRole>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub bio: String,
}

/// Partial profile update. Present fields replace the stored ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub college: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
    pub skills: Option<Vec<String>>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    fn apply(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(college) = self.college {
            profile.college = Some(college);
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = avatar;
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        if let Some(github) = self.github {
            profile.github = github;
        }
        if let Some(linkedin) = self.linkedin {
            profile.linkedin = linkedin;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
    }
}

/// Persisted session payload: the profile plus the authenticated flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub authenticated: bool,
}

/// Authentication boundary. Implementations verify credentials and hand
/// back the profile the session should adopt.
pub trait AuthBackend {
    /// Verify credentials for an existing account.
    fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile, AuthError>;

    /// Create a fresh account.
    fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        college: &str,
    ) -> Result<UserProfile, AuthError>;
}

/// Demo mock backend: it ignores the password and always succeeds,
/// returning the fixed demo profile. An optional delay models network
/// latency.
#[derive(Debug, Clone, Default)]
pub struct MockAuthBackend {
    delay: Duration,
}

impl MockAuthBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl AuthBackend for MockAuthBackend {
    fn authenticate(&self, email: &str, _password: &str) -> Result<UserProfile, AuthError> {
        self.simulate_latency();
        Ok(UserProfile {
            id: "1".into(),
            name: "Alex Chen".into(),
            email: email.into(),
            college: None,
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".into(),
            role: "Full Stack Developer".into(),
            team: Some("CyberSynthetics".into()),
            team_role: Some(TeamRole::Leader),
            skills: vec!["React".into(), "Node.js".into(), "Python".into()],
            github: "https://github.com/alexchen".into(),
            linkedin: "https://linkedin.com/in/alexchen".into(),
            bio: String::new(),
        })
    }

    fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
        college: &str,
    ) -> Result<UserProfile, AuthError> {
        self.simulate_latency();
        Ok(UserProfile {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            college: Some(college.into()),
            avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={name}"),
            role: "Developer".into(),
            team: None,
            team_role: None,
            skills: Vec::new(),
            github: String::new(),
            linkedin: String::new(),
            bio: String::new(),
        })
    }
}

/// Minimal shape check shared by signup and team invites.
pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// The session store: in-memory state backed by a persisted document.
pub struct Session {
    state: SessionState,
    store: Document,
    backend: Box<dyn AuthBackend>,
}

impl Session {
    /// Construct with explicit dependencies, restoring persisted state.
    /// Corrupt persisted data restores as logged-out.
    pub fn new(store: Document, backend: Box<dyn AuthBackend>) -> Self {
        let state = store.load_or_default();
        Self {
            state,
            store,
            backend,
        }
    }

    /// Open the default session: `session.json` under the data dir and
    /// the mock backend with the configured simulated delay.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, CoreError> {
        let store = Document::open("session")?;
        let delay = crate::storage::Config::load_or_default().auth.mock_delay_ms;
        let backend = Box::new(MockAuthBackend::with_delay(Duration::from_millis(delay)));
        Ok(Self::new(store, backend))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.state.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Sign in. Missing fields are rejected before the backend is asked.
    ///
    /// # Errors
    /// Returns an error on empty fields, backend rejection, or a failed
    /// persist.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Event, CoreError> {
        if email.is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        let profile = self.backend.authenticate(email, password)?;
        self.state = SessionState {
            profile: Some(profile),
            authenticated: true,
        };
        self.store.save(&self.state)?;
        Ok(Event::LoggedIn {
            email: email.into(),
            at: Utc::now(),
        })
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    /// Returns an error on empty fields, a malformed email, backend
    /// rejection, or a failed persist.
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        college: &str,
    ) -> Result<Event, CoreError> {
        if name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }
        validate_email(email)?;

        let profile = self.backend.register(name, email, password, college)?;
        self.state = SessionState {
            profile: Some(profile),
            authenticated: true,
        };
        self.store.save(&self.state)?;
        Ok(Event::SignedUp {
            email: email.into(),
            at: Utc::now(),
        })
    }

    /// Clear the session from memory and disk.
    ///
    /// # Errors
    /// Returns an error if the persisted document cannot be removed.
    pub fn logout(&mut self) -> Result<Event, CoreError> {
        self.state = SessionState::default();
        self.store.clear()?;
        Ok(Event::LoggedOut { at: Utc::now() })
    }

    /// Merge the given fields into the current profile and re-persist.
    ///
    /// # Errors
    /// Returns an error when not signed in or on a failed persist.
    pub fn update(&mut self, update: ProfileUpdate) -> Result<Event, CoreError> {
        let profile = self
            .state
            .profile
            .as_mut()
            .filter(|_| self.state.authenticated)
            .ok_or(AuthError::NotAuthenticated)?;
        update.apply(profile);
        self.store.save(&self.state)?;
        Ok(Event::ProfileUpdated { at: Utc::now() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let store = Document::at(dir.path().to_path_buf(), "session");
        let session = Session::new(store, Box::new(MockAuthBackend::new()));
        (dir, session)
    }

    fn reopen(dir: &tempfile::TempDir) -> Session {
        let store = Document::at(dir.path().to_path_buf(), "session");
        Session::new(store, Box::new(MockAuthBackend::new()))
    }

    #[test]
    fn login_establishes_demo_profile() {
        let (_dir, mut session) = temp_session();
        session.login("alex@example.com", "hunter2").unwrap();
        assert!(session.is_authenticated());
        let profile = session.profile().unwrap();
        assert_eq!(profile.name, "Alex Chen");
        assert_eq!(profile.email, "alex@example.com");
        assert_eq!(profile.team_role, Some(TeamRole::Leader));
    }

    #[test]
    fn login_rejects_empty_fields() {
        let (_dir, mut session) = temp_session();
        assert!(session.login("", "pw").is_err());
        assert!(session.login("a@b.com", "").is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn signup_creates_fresh_profile() {
        let (_dir, mut session) = temp_session();
        session
            .signup("Priya Nair", "priya@uni.edu", "pw", "IIT Delhi")
            .unwrap();
        let profile = session.profile().unwrap();
        assert_eq!(profile.role, "Developer");
        assert!(profile.skills.is_empty());
        assert!(profile.team.is_none());
        assert_eq!(profile.college.as_deref(), Some("IIT Delhi"));
    }

    #[test]
    fn signup_rejects_bad_email() {
        let (_dir, mut session) = temp_session();
        assert!(session.signup("A", "not-an-email", "pw", "").is_err());
        assert!(session.signup("A", "a@host", "pw", "").is_err());
    }

    #[test]
    fn session_survives_reload() {
        let (dir, mut session) = temp_session();
        session.login("alex@example.com", "pw").unwrap();
        drop(session);

        let restored = reopen(&dir);
        assert!(restored.is_authenticated());
        assert_eq!(restored.profile().unwrap().email, "alex@example.com");
    }

    #[test]
    fn logout_clears_memory_and_disk() {
        let (dir, mut session) = temp_session();
        session.login("alex@example.com", "pw").unwrap();
        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert!(session.profile().is_none());

        let restored = reopen(&dir);
        assert!(!restored.is_authenticated());
        assert!(restored.profile().is_none());
    }

    #[test]
    fn update_merges_and_persists_exactly() {
        let (dir, mut session) = temp_session();
        session.login("alex@example.com", "pw").unwrap();
        let before = session.profile().unwrap().clone();

        session
            .update(ProfileUpdate {
                skills: Some(vec!["Go".into()]),
                ..Default::default()
            })
            .unwrap();

        let restored = reopen(&dir);
        let after = restored.profile().unwrap();
        assert_eq!(after.skills, vec!["Go".to_string()]);
        assert_eq!(after.name, before.name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.github, before.github);
    }

    #[test]
    fn update_requires_authentication() {
        let (_dir, mut session) = temp_session();
        let result = session.update(ProfileUpdate {
            bio: Some("hi".into()),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn corrupt_session_file_restores_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = Document::at(dir.path().to_path_buf(), "session");
        std::fs::write(store.path(), "{definitely not json").unwrap();

        let session = Session::new(store, Box::new(MockAuthBackend::new()));
        assert!(!session.is_authenticated());
        assert!(session.profile().is_none());
    }
}
